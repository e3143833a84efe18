use std::collections::BTreeMap;

use crate::algorithm::PredecessorTable;
use crate::graph::NodeId;
use crate::{node_label, Error, Result};

/// First hop from the source towards every reachable destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingTable<N: NodeId> {
    source: N,
    next_hops: BTreeMap<N, N>,
}

impl<N: NodeId> ForwardingTable<N> {
    /// Follows each destination's predecessor chain back to the source.
    ///
    /// A chain that loops or stops before reaching the source is reported as
    /// `Error::InconsistentPredecessors`.
    pub fn from_predecessors(predecessors: &PredecessorTable<N>) -> Result<Self> {
        let source = predecessors.source().clone();
        let mut next_hops = BTreeMap::new();

        for (destination, _) in predecessors.reached() {
            let mut hop = destination;
            let mut steps = 0;
            loop {
                let pred = predecessors
                    .get(hop)
                    .ok_or_else(|| Error::InconsistentPredecessors(node_label(hop)))?;
                if *pred == source {
                    break;
                }
                hop = pred;
                steps += 1;
                if steps > predecessors.len() {
                    return Err(Error::InconsistentPredecessors(node_label(destination)));
                }
            }
            next_hops.insert(destination.clone(), hop.clone());
        }

        Ok(ForwardingTable { source, next_hops })
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn next_hop(&self, destination: &N) -> Option<&N> {
        self.next_hops.get(destination)
    }

    pub fn len(&self) -> usize {
        self.next_hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_hops.is_empty()
    }

    /// `(destination, next hop)` pairs in ascending destination order
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.next_hops.iter()
    }
}
