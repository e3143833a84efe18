use log::info;
use std::collections::BTreeSet;

use crate::algorithm::{
    DistanceTable, PathCost, PredecessorTable, ShortestPathAlgorithm, ShortestPathResult, Trace,
};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Cost, Graph, NodeId};
use crate::{node_label, Error, Result};

/// Classic heap-based Dijkstra
///
/// Settles nodes in the same (cost, ascending id) order as `LinkState` with the
/// default tie-break, so both produce the same tables. Keeps no trace. Costs
/// must be totally ordered.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Cost + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(node_label(source)));
        }

        let mut distances = DistanceTable::new();
        let mut predecessors = PredecessorTable::new(source.clone());
        for node in graph.nodes().filter(|node| *node != source) {
            distances.set(node.clone(), PathCost::Unreachable);
            predecessors.set(node.clone(), None);
        }

        let mut settled = BTreeSet::new();
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry
            if !settled.insert(u.clone()) {
                continue;
            }

            for (v, weight) in graph.neighbors(&u) {
                if settled.contains(v) {
                    continue;
                }
                let sum = dist_u
                    .checked_sum(weight)
                    .ok_or_else(|| Error::CostOverflow(node_label(&u), node_label(v)))?;
                let new_dist = PathCost::Finite(sum);
                let should_update = match distances.get(v) {
                    Some(current) => new_dist < current,
                    None => false,
                };

                if should_update {
                    distances.set(v.clone(), new_dist);
                    predecessors.set(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), sum);
                }
            }
        }

        info!(
            "Dijkstra from {:?}: {} of {} node(s) settled",
            source,
            settled.len(),
            graph.node_count()
        );

        Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors,
            trace: Trace::new(),
        })
    }
}
