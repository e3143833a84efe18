//! Hand-off formats for presentation and drawing tools

pub mod table;
pub mod export;

pub use export::{GraphExport, LinkExport};
pub use table::TraceTable;
