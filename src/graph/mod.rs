//! Link graph built from page text
//!
//! Pages are read from disk, their link lines extracted as directed edges,
//! and the edges grouped by source page for ranking.

pub mod extract;
pub mod store;
pub mod types;

// Re-export main types
pub use extract::{extract_links, parse_link_line};
pub use store::{GraphError, GraphResult, LinkGraph};
pub use types::LinkEdge;
