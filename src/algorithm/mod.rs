pub mod cost;
pub mod tables;
pub mod trace;
pub mod traits;
pub mod link_state;
pub mod dijkstra;

pub use cost::PathCost;
pub use tables::{DistanceTable, PredecessorTable};
pub use trace::{Cell, StepRecord, Trace};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
