//! Iterative vote-propagation PageRank for small directed link graphs.
//!
//! Pages start at rank 1.0 and pass their rank along out-links for a fixed
//! number of map -> shuffle -> reduce rounds. The highest-ranked page is
//! selected at the end.

pub mod common;
pub mod pagerank;
pub mod shuffle;

pub use common::{PageId, PageScore, RankedPage, Vote, INITIAL_RANK};
pub use pagerank::{
    build_graph, build_page, contributions, extract_ranks, max_rank, page_rank, reduce_votes,
    run_rounds, top_page, Contribution, PageRankConfig, RankError, RankResult, Round,
    ZeroDegreePolicy,
};
pub use shuffle::group_by_key;
