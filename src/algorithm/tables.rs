use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::algorithm::PathCost;
use crate::graph::{Cost, NodeId};

/// Best known cost from the source for every non-source node
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<N, W> {
    entries: BTreeMap<N, PathCost<W>>,
}

impl<N, W> DistanceTable<N, W>
where
    N: NodeId,
    W: Cost,
{
    pub fn new() -> Self {
        DistanceTable {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, node: &N) -> Option<PathCost<W>> {
        self.entries.get(node).copied()
    }

    pub(crate) fn set(&mut self, node: N, cost: PathCost<W>) {
        self.entries.insert(node, cost);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.entries.contains_key(node)
    }

    /// Iterates in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (&N, PathCost<W>)> + '_ {
        self.entries.iter().map(|(node, cost)| (node, *cost))
    }

    /// Finite costs only
    pub fn reachable(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.entries
            .iter()
            .filter_map(|(node, cost)| cost.finite().map(|c| (node, c)))
    }
}

impl<N, W> Default for DistanceTable<N, W>
where
    N: NodeId,
    W: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The node preceding each non-source node on its best known path
///
/// `None` marks a node for which no path has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTable<N> {
    source: N,
    entries: BTreeMap<N, Option<N>>,
}

impl<N: NodeId> PredecessorTable<N> {
    pub fn new(source: N) -> Self {
        PredecessorTable {
            source,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from explicit `(destination, predecessor)` pairs
    pub fn from_entries<I>(source: N, entries: I) -> Self
    where
        I: IntoIterator<Item = (N, Option<N>)>,
    {
        PredecessorTable {
            source,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    /// The predecessor of `node`, if one has been recorded
    pub fn get(&self, node: &N) -> Option<&N> {
        self.entries.get(node).and_then(|p| p.as_ref())
    }

    pub fn contains(&self, node: &N) -> bool {
        self.entries.contains_key(node)
    }

    pub(crate) fn set(&mut self, node: N, predecessor: Option<N>) {
        self.entries.insert(node, predecessor);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry, including nodes without a predecessor
    pub fn iter(&self) -> btree_map::Iter<'_, N, Option<N>> {
        self.entries.iter()
    }

    /// `(destination, predecessor)` pairs for nodes that have a predecessor
    pub fn reached(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.entries
            .iter()
            .filter_map(|(node, pred)| pred.as_ref().map(|p| (node, p)))
    }
}
