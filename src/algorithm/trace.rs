use std::collections::BTreeSet;

use crate::algorithm::{DistanceTable, PathCost, PredecessorTable};
use crate::graph::{Cost, NodeId};

/// What a step shows for a single node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a, N, W> {
    /// Already settled: finalized, shown blank
    Settled,
    /// Still tentative
    Tentative {
        cost: PathCost<W>,
        predecessor: Option<&'a N>,
    },
}

/// Snapshot of the computation after one iteration
#[derive(Debug, Clone)]
pub struct StepRecord<N, W> {
    step: usize,
    /// Node settled during this step; `None` for the initial step
    relay: Option<N>,
    settled: BTreeSet<N>,
    distances: DistanceTable<N, W>,
    predecessors: PredecessorTable<N>,
}

impl<N, W> StepRecord<N, W>
where
    N: NodeId,
    W: Cost,
{
    pub(crate) fn new(
        step: usize,
        relay: Option<N>,
        settled: BTreeSet<N>,
        distances: DistanceTable<N, W>,
        predecessors: PredecessorTable<N>,
    ) -> Self {
        StepRecord {
            step,
            relay,
            settled,
            distances,
            predecessors,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn relay(&self) -> Option<&N> {
        self.relay.as_ref()
    }

    pub fn settled(&self) -> &BTreeSet<N> {
        &self.settled
    }

    pub fn distances(&self) -> &DistanceTable<N, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable<N> {
        &self.predecessors
    }

    /// The view of `node` at this step, or `None` for an unknown node
    pub fn cell(&self, node: &N) -> Option<Cell<'_, N, W>> {
        if self.settled.contains(node) {
            return Some(Cell::Settled);
        }
        let cost = self.distances.get(node)?;
        Some(Cell::Tentative {
            cost,
            predecessor: self.predecessors.get(node),
        })
    }
}

/// Ordered, append-only sequence of step snapshots
#[derive(Debug, Clone)]
pub struct Trace<N, W> {
    steps: Vec<StepRecord<N, W>>,
}

impl<N, W> Trace<N, W>
where
    N: NodeId,
    W: Cost,
{
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, record: StepRecord<N, W>) {
        self.steps.push(record);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&StepRecord<N, W>> {
        self.steps.get(step)
    }

    pub fn last(&self) -> Option<&StepRecord<N, W>> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<N, W>> {
        self.steps.iter()
    }

    /// Every node appearing in the trace, ascending
    pub fn nodes(&self) -> BTreeSet<N> {
        let mut nodes = BTreeSet::new();
        if let Some(first) = self.steps.first() {
            nodes.extend(first.settled.iter().cloned());
            nodes.extend(first.distances.iter().map(|(node, _)| node.clone()));
        }
        nodes
    }
}

impl<N, W> Default for Trace<N, W>
where
    N: NodeId,
    W: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N, W> IntoIterator for &'a Trace<N, W>
where
    N: NodeId,
    W: Cost,
{
    type Item = &'a StepRecord<N, W>;
    type IntoIter = std::slice::Iter<'a, StepRecord<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
