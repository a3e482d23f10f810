//! Graph algorithms module
//!
//! The ranking engine lives in the `linkrank-algorithms` crate.
//! This module provides the integration/adapter layer for [`LinkGraph`].

use crate::graph::LinkGraph;
use serde::Serialize;
use tracing::info;

// Re-export algorithms
pub use linkrank_algorithms::{
    extract_ranks, max_rank, page_rank, PageRankConfig, PageScore, RankError, RankResult,
    RankedPage, ZeroDegreePolicy,
};

/// Outcome of ranking a link graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub damping_factor: f64,
    pub iterations: usize,
    /// Highest-ranked page, `None` for an empty graph
    pub top: Option<PageScore>,
    /// Final ranks, highest first
    pub ranks: Vec<PageScore>,
    /// Final round records
    pub pages: Vec<RankedPage>,
}

impl RankReport {
    pub fn rank_of(&self, page: &str) -> Option<f64> {
        self.ranks.iter().find(|s| s.name == page).map(|s| s.rank)
    }

    pub fn total_rank(&self) -> f64 {
        self.ranks.iter().map(|s| s.rank).sum()
    }
}

/// Rank every page of `graph` and select the top one
pub fn rank_graph(graph: &LinkGraph, config: PageRankConfig) -> RankResult<RankReport> {
    let pages = page_rank(graph.grouped(), config)?;

    let scores = extract_ranks(&pages);
    // Selected before sorting so ties resolve in round order
    let top = max_rank(&scores);

    let mut ranks = scores;
    ranks.sort_by(|a, b| b.rank.total_cmp(&a.rank));

    if let Some(ref top) = top {
        info!("Top page: {}", top);
    } else {
        info!("No pages ranked");
    }

    Ok(RankReport {
        damping_factor: config.damping_factor,
        iterations: config.iterations,
        top,
        ranks,
        pages,
    })
}
