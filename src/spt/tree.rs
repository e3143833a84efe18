use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::PredecessorTable;
use crate::graph::{Cost, Graph, LinkKey, NodeId};
use crate::{node_label, Error, Result};

/// The union of the shortest paths from a root to every node it reaches
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: Cost,
{
    root: N,
    nodes: BTreeSet<N>,
    links: BTreeMap<LinkKey<N>, W>,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: Cost,
{
    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn nodes(&self) -> &BTreeSet<N> {
        &self.nodes
    }

    pub fn links(&self) -> &BTreeMap<LinkKey<N>, W> {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Cost of the tree link between `a` and `b`, in either orientation
    pub fn link_cost(&self, a: &N, b: &N) -> Option<W> {
        self.links.get(&LinkKey::new(a.clone(), b.clone())).copied()
    }

    /// Sum of all tree link costs
    pub fn total_cost(&self) -> Result<W> {
        self.links
            .values()
            .try_fold(W::zero(), |acc, cost| acc.checked_sum(*cost))
            .ok_or(Error::TotalCostOverflow)
    }

    /// True when no link closes a cycle
    pub fn is_acyclic(&self) -> bool {
        let mut components = DisjointSets::new(self.nodes.iter());
        self.links
            .keys()
            .all(|key| components.union(key.low(), key.high()))
    }

    /// True when every node is connected to the root through tree links
    pub fn is_connected(&self) -> bool {
        let mut components = DisjointSets::new(self.nodes.iter());
        for key in self.links.keys() {
            components.union(key.low(), key.high());
        }
        let root = components.find(&self.root);
        self.nodes.iter().all(|node| components.find(node) == root)
    }
}

/// Turns a predecessor table into a shortest-path tree
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    /// Adds one tree link per `(destination, predecessor)` pair, with the cost the
    /// link has in `graph`.
    ///
    /// Fails with `Error::MissingLink` if a pair isn't linked in `graph`, which
    /// means the table was computed over a different topology.
    pub fn build<N, W, G>(
        predecessors: &PredecessorTable<N>,
        graph: &G,
    ) -> Result<ShortestPathTree<N, W>>
    where
        N: NodeId,
        W: Cost,
        G: Graph<N, W>,
    {
        let root = predecessors.source().clone();
        let mut nodes = BTreeSet::new();
        let mut links = BTreeMap::new();
        nodes.insert(root.clone());

        for (destination, predecessor) in predecessors.reached() {
            if destination == predecessor {
                continue;
            }
            let cost = graph.link_cost(predecessor, destination).ok_or_else(|| {
                Error::MissingLink(node_label(predecessor), node_label(destination))
            })?;

            nodes.insert(predecessor.clone());
            nodes.insert(destination.clone());
            links.insert(LinkKey::new(predecessor.clone(), destination.clone()), cost);
        }

        debug!(
            "Built shortest-path tree rooted at {:?}: {} node(s), {} link(s)",
            root,
            nodes.len(),
            links.len()
        );

        Ok(ShortestPathTree { root, nodes, links })
    }
}

/// Union-find over borrowed node ids
struct DisjointSets<'a, N: Ord> {
    parent: BTreeMap<&'a N, &'a N>,
}

impl<'a, N: Ord> DisjointSets<'a, N> {
    fn new(nodes: impl Iterator<Item = &'a N>) -> Self {
        DisjointSets {
            parent: nodes.map(|node| (node, node)).collect(),
        }
    }

    fn find(&self, node: &'a N) -> &'a N {
        let mut current = node;
        while let Some(&parent) = self.parent.get(current) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }

    /// Joins the sets of `a` and `b`; returns false if they were already joined
    fn union(&mut self, a: &'a N, b: &'a N) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        true
    }
}
