pub mod traits;
pub mod topology;
pub mod samples;
pub mod generators;

pub use traits::{Cost, Graph, MutableGraph, NodeId};
pub use topology::{LinkKey, Topology};
