//! Link-state SPF - single-source shortest paths over small network topologies
//!
//! This library implements the shortest path first computation used by link-state
//! routing protocols such as OSPF and IS-IS. A source router repeatedly settles the
//! closest unsettled node and relaxes the links leaving it, recording every step so
//! the run can be inspected row by row.
//!
//! The predecessor information produced by the computation is turned into a
//! shortest-path tree and a forwarding table for the source.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod spt;

pub use algorithm::{
    dijkstra::Dijkstra, link_state::LinkState, PathCost, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use config::{EngineConfig, TieBreak, UnreachablePolicy};
/// Re-export main types for convenient use
pub use graph::{LinkKey, Topology};
pub use spt::{ForwardingTable, ShortestPathTree, TreeBuilder};

use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node {0} not found in topology")]
    SourceNotFound(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Self-loop on node {0}")]
    SelfLoop(String),

    #[error("Duplicate link between {0} and {1}")]
    DuplicateLink(String, String),

    #[error("Invalid link cost between {0} and {1}: {2}")]
    NegativeCost(String, String, String),

    #[error("Predecessor link between {0} and {1} not present in topology")]
    MissingLink(String, String),

    #[error("Path cost overflow reaching {1} via {0}")]
    CostOverflow(String, String),

    #[error("Total cost of links overflows the cost type")]
    TotalCostOverflow,

    #[error("Inconsistent predecessor chain at node {0}")]
    InconsistentPredecessors(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Renders a node id for error messages
pub(crate) fn node_label<N: Debug>(node: &N) -> String {
    format!("{:?}", node)
}
