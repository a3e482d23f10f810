//! Core type definitions for the link graph

use linkrank_algorithms::PageId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed link from one page to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct LinkEdge {
    pub source: PageId,
    pub target: PageId,
}

impl LinkEdge {
    pub fn new(source: impl Into<PageId>, target: impl Into<PageId>) -> Self {
        LinkEdge {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Edges with an empty target are malformed and dropped before ranking
    pub fn is_malformed(&self) -> bool {
        self.target.is_empty()
    }
}

impl fmt::Display for LinkEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<S: Into<PageId>, T: Into<PageId>> From<(S, T)> for LinkEdge {
    fn from((source, target): (S, T)) -> Self {
        LinkEdge::new(source, target)
    }
}
