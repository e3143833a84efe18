use log::warn;
use std::collections::BTreeSet;

use crate::algorithm::{DistanceTable, PathCost, PredecessorTable, Trace};
use crate::graph::{Cost, Graph, NodeId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// Source node
    pub source: N,

    /// Final cost from source to each non-source node
    pub distances: DistanceTable<N, W>,

    /// Predecessor of each non-source node in the shortest path tree
    pub predecessors: PredecessorTable<N>,

    /// Per-step snapshots, empty when tracing is disabled
    pub trace: Trace<N, W>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// Cost from the source to `node`; zero for the source itself
    pub fn distance(&self, node: &N) -> Option<PathCost<W>> {
        if *node == self.source {
            return Some(PathCost::zero());
        }
        self.distances.get(node)
    }

    /// Nodes no path was found to, ascending
    pub fn unreachable(&self) -> Vec<&N> {
        self.distances
            .iter()
            .filter(|(_, cost)| !cost.is_finite())
            .map(|(node, _)| node)
            .collect()
    }

    /// Splits off the predecessor table and the trace
    pub fn into_parts(self) -> (PredecessorTable<N>, Trace<N, W>) {
        (self.predecessors, self.trace)
    }

    /// Walks the predecessor chain back from `target`
    ///
    /// Returns `None` if the target is unreachable or the chain is broken.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        match self.distance(target) {
            Some(PathCost::Finite(_)) => {}
            _ => return None,
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = BTreeSet::new();

        // Build path in reverse order
        while *current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at node {:?}", current);
                return None;
            }

            path.push(current.clone());
            match self.predecessors.get(current) {
                Some(pred) => current = pred,
                // A reachable node must have a predecessor chain back to the source
                None => return None,
            }

            if path.len() > self.predecessors.len() {
                warn!("Path length exceeds topology size, likely a cycle");
                return None;
            }
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Cost,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}
