use std::fmt::Debug;
use num_traits::{CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;

use crate::graph::LinkKey;
use crate::Result;

/// Node identifiers: opaque, comparable and totally ordered
///
/// The ordering is what makes tie-breaking and table layout deterministic.
pub trait NodeId: Ord + Clone + Debug {}

impl<T> NodeId for T where T: Ord + Clone + Debug {}

/// Link costs: non-negative numeric values that can be summed along a path
pub trait Cost: Zero + Copy + PartialOrd + Debug {
    /// Sum of two costs, or `None` if it overflows the cost type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums never panic but can leave the finite range
fn finite_sum<F: Float>(a: F, b: F) -> Option<F> {
    let sum = a + b;
    if sum.is_finite() {
        Some(sum)
    } else {
        None
    }
}

impl Cost for f32 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        finite_sum(self, other)
    }
}

impl Cost for f64 {
    fn checked_sum(self, other: Self) -> Option<Self> {
        finite_sum(self, other)
    }
}

impl<F> Cost for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn checked_sum(self, other: Self) -> Option<Self> {
        finite_sum(self.0, other.0).map(OrderedFloat)
    }
}

/// Trait representing a weighted undirected graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Cost,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of links in the graph
    fn link_count(&self) -> usize;

    /// Returns an iterator over the nodes in ascending order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the neighbors of a node and the cost of the link to each
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>;

    /// Returns an iterator over every link and its cost
    fn links(&self) -> Box<dyn Iterator<Item = (&LinkKey<N>, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Gets the cost of the link between two nodes, in either orientation
    fn link_cost(&self, a: &N, b: &N) -> Option<W>;

    /// Returns true if there's a link between the two nodes
    fn has_link(&self, a: &N, b: &N) -> bool {
        self.link_cost(a, b).is_some()
    }
}

/// Trait for building up a graph
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// Adds a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds an undirected link between two existing nodes
    fn add_link(&mut self, a: N, b: N, cost: W) -> Result<()>;
}
