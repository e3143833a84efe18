use crate::graph::traits::{Cost, Graph, MutableGraph, NodeId};
use crate::{node_label, Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// An unordered node pair, stored with the smaller id first
///
/// `LinkKey::new(a, b)` and `LinkKey::new(b, a)` are equal, which is what keeps a
/// link from being recorded once per orientation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkKey<N> {
    low: N,
    high: N,
}

impl<N: Ord> LinkKey<N> {
    pub fn new(a: N, b: N) -> Self {
        if a <= b {
            LinkKey { low: a, high: b }
        } else {
            LinkKey { low: b, high: a }
        }
    }

    /// The endpoint with the smaller id
    pub fn low(&self) -> &N {
        &self.low
    }

    /// The endpoint with the larger id
    pub fn high(&self) -> &N {
        &self.high
    }

    pub fn contains(&self, node: &N) -> bool {
        self.low == *node || self.high == *node
    }

    /// Given one endpoint, returns the other
    pub fn other(&self, node: &N) -> Option<&N> {
        if self.low == *node {
            Some(&self.high)
        } else if self.high == *node {
            Some(&self.low)
        } else {
            None
        }
    }
}

/// A network topology: routers and the undirected, costed links between them
#[derive(Debug, Clone)]
pub struct Topology<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// All nodes, in ascending order
    nodes: BTreeSet<N>,

    /// Link costs keyed by unordered pair
    links: BTreeMap<LinkKey<N>, W>,

    /// Adjacency for each node: node -> {neighbor -> cost}
    adjacency: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N, W> Topology<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// Creates a new empty topology
    pub fn new() -> Self {
        Topology {
            nodes: BTreeSet::new(),
            links: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a topology from a node set and a list of links, validating every link
    pub fn from_parts<I, L>(nodes: I, links: L) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        L: IntoIterator<Item = (N, N, W)>,
    {
        let mut topology = Topology::new();
        for node in nodes {
            topology.add_node(node);
        }
        for (a, b, cost) in links {
            topology.add_link(a, b, cost)?;
        }
        Ok(topology)
    }

    /// Returns a copy of this topology with every cost converted
    pub fn map_costs<V, F>(&self, mut f: F) -> Result<Topology<N, V>>
    where
        V: Cost,
        F: FnMut(W) -> V,
    {
        Topology::from_parts(
            self.nodes.iter().cloned(),
            self.links
                .iter()
                .map(|(key, cost)| (key.low().clone(), key.high().clone(), f(*cost))),
        )
    }

    /// Sum of all link costs
    pub fn total_cost(&self) -> Result<W> {
        self.links
            .values()
            .try_fold(W::zero(), |acc, cost| acc.checked_sum(*cost))
            .ok_or(Error::TotalCostOverflow)
    }
}

impl<N, W> Default for Topology<N, W>
where
    N: NodeId,
    W: Cost,
{
    fn default() -> Self {
        Topology::new()
    }
}

impl<N, W> Graph<N, W> for Topology<N, W>
where
    N: NodeId,
    W: Cost,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn link_count(&self) -> usize {
        self.links.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        if let Some(neighbors) = self.adjacency.get(node) {
            Box::new(neighbors.iter().map(|(neighbor, cost)| (neighbor, *cost)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn links(&self) -> Box<dyn Iterator<Item = (&LinkKey<N>, W)> + '_> {
        Box::new(self.links.iter().map(|(key, cost)| (key, *cost)))
    }

    fn has_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    fn link_cost(&self, a: &N, b: &N) -> Option<W> {
        self.adjacency.get(a).and_then(|neighbors| neighbors.get(b)).copied()
    }
}

impl<N, W> MutableGraph<N, W> for Topology<N, W>
where
    N: NodeId,
    W: Cost,
{
    fn add_node(&mut self, node: N) -> bool {
        if !self.nodes.insert(node.clone()) {
            return false;
        }
        self.adjacency.insert(node, BTreeMap::new());
        true
    }

    fn add_link(&mut self, a: N, b: N, cost: W) -> Result<()> {
        for endpoint in [&a, &b] {
            if !self.has_node(endpoint) {
                return Err(Error::UnknownNode(node_label(endpoint)));
            }
        }
        if a == b {
            return Err(Error::SelfLoop(node_label(&a)));
        }
        // Also rejects costs that don't compare with zero, e.g. NaN
        if !(cost >= W::zero()) {
            return Err(Error::NegativeCost(
                node_label(&a),
                node_label(&b),
                format!("{:?}", cost),
            ));
        }

        let key = LinkKey::new(a.clone(), b.clone());
        if self.links.contains_key(&key) {
            return Err(Error::DuplicateLink(node_label(&a), node_label(&b)));
        }

        self.links.insert(key, cost);
        if let Some(neighbors) = self.adjacency.get_mut(&a) {
            neighbors.insert(b.clone(), cost);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.insert(a, cost);
        }
        Ok(())
    }
}
