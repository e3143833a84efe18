use std::fmt;

use crate::graph::Cost;

/// Best known cost of a path from the source
///
/// `Unreachable` sorts after every finite cost and never takes part in
/// arithmetic, so it can't overflow or be mistaken for a real cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathCost<W> {
    Finite(W),
    Unreachable,
}

impl<W: Cost> PathCost<W> {
    pub fn zero() -> Self {
        PathCost::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, PathCost::Finite(_))
    }

    /// Returns the finite cost, if any
    pub fn finite(&self) -> Option<W> {
        match self {
            PathCost::Finite(cost) => Some(*cost),
            PathCost::Unreachable => None,
        }
    }

    /// Extends the path by a link of the given cost.
    /// Returns `None` if the sum overflows the cost type.
    pub fn extend(&self, link_cost: W) -> Option<Self> {
        match self {
            PathCost::Finite(cost) => cost.checked_sum(link_cost).map(PathCost::Finite),
            PathCost::Unreachable => Some(PathCost::Unreachable),
        }
    }
}

impl<W: fmt::Display> fmt::Display for PathCost<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Finite(cost) => write!(f, "{}", cost),
            PathCost::Unreachable => write!(f, "inf"),
        }
    }
}
