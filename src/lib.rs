//! LinkRank
//!
//! Ranks a small set of linked pages (e.g. documentation files) with an
//! iterative, vote-propagating PageRank and reports the most important page.
//!
//! # Pipeline
//!
//! - Link extraction: link lines of each page become directed edges
//! - Graph building: edges grouped by source page become round-0 records
//! - Propagation: a fixed number of map -> shuffle -> reduce rounds
//! - Selection: final ranks reduced to the single highest-ranked page
//!
//! The engine itself lives in the `linkrank-algorithms` crate; this crate
//! adds loading, configuration and output around it.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{rank_graph, LinkGraph, PageRankConfig};
//!
//! let graph = LinkGraph::from_edges(vec![
//!     ("README.md", "go.md"),
//!     ("README.md", "java.md"),
//!     ("go.md", "README.md"),
//!     ("java.md", "README.md"),
//! ]);
//!
//! let report = rank_graph(&graph, PageRankConfig::default()).unwrap();
//! assert_eq!(report.top.unwrap().name, "README.md");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod output;

// Re-export main types for convenience
pub use algo::{
    rank_graph, PageRankConfig, PageScore, RankError, RankReport, RankResult, RankedPage,
    ZeroDegreePolicy,
};
pub use config::{ConfigError, ConfigResult, LinkRankConfig};
pub use graph::{GraphError, GraphResult, LinkEdge, LinkGraph};

use thiserror::Error;

/// Errors from any stage of a ranking run
#[derive(Error, Debug)]
pub enum LinkRankError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ranking error: {0}")]
    Rank(#[from] RankError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;

/// Load the configured pages and rank them
pub fn run(config: &LinkRankConfig) -> LinkRankResult<RankReport> {
    let graph = LinkGraph::load_pages(&config.data_dir, &config.pages)?;
    Ok(rank_graph(&graph, config.page_rank_config())?)
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
