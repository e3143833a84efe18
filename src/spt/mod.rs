pub mod tree;
pub mod forwarding;

pub use forwarding::ForwardingTable;
pub use tree::{ShortestPathTree, TreeBuilder};
