//! Shared records for the rank-propagation engine
//!
//! Every round of the engine is a set of [`RankedPage`] records. Each record
//! carries the [`Vote`]s that drive the next round's propagation.

use std::fmt;

/// Page identifier (e.g. a file name). Compared by exact equality.
pub type PageId = String;

/// Rank every page starts from before any round has run.
pub const INITIAL_RANK: f64 = 1.0;

/// One directed edge as seen during propagation.
///
/// `name` is the target page when the vote is built by the graph builder, and
/// the voting (source) page once it has travelled through a shuffle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vote {
    pub name: PageId,
    /// Rank of the page that emitted this vote
    pub rank: f64,
    /// Out-degree of the page that emitted this vote
    pub weight: usize,
}

impl Vote {
    /// A vote whose rank has not been set yet
    pub fn new(name: impl Into<PageId>, weight: usize) -> Self {
        Self::with_rank(name, INITIAL_RANK, weight)
    }

    pub fn with_rank(name: impl Into<PageId>, rank: f64, weight: usize) -> Self {
        Vote {
            name: name.into(),
            rank,
            weight,
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}, {:.5}, {}", self.name, self.rank, self.weight)
    }
}

/// A page's state within a single round.
///
/// Records are never mutated once a round has produced them; the next round
/// builds a fresh set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPage {
    pub name: PageId,
    pub rank: f64,
    pub votes: Vec<Vote>,
}

impl RankedPage {
    /// A round-0 record at the initial rank
    pub fn new(name: impl Into<PageId>, votes: Vec<Vote>) -> Self {
        Self::with_rank(name, INITIAL_RANK, votes)
    }

    pub fn with_rank(name: impl Into<PageId>, rank: f64, votes: Vec<Vote>) -> Self {
        RankedPage {
            name: name.into(),
            rank,
            votes,
        }
    }

    /// Number of votes this record will propagate
    pub fn out_degree(&self) -> usize {
        self.votes.len()
    }

    /// Names carried by this record's votes, in order
    pub fn vote_names(&self) -> Vec<&str> {
        self.votes.iter().map(|v| v.name.as_str()).collect()
    }
}

impl fmt::Display for RankedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:.5},[", self.name, self.rank)?;
        for (i, vote) in self.votes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vote)?;
        }
        write!(f, "]")
    }
}

/// A `(page, rank)` pair as produced by the rank extractor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageScore {
    pub name: PageId,
    pub rank: f64,
}

impl PageScore {
    pub fn new(name: impl Into<PageId>, rank: f64) -> Self {
        PageScore {
            name: name.into(),
            rank,
        }
    }
}

impl From<&RankedPage> for PageScore {
    fn from(page: &RankedPage) -> Self {
        PageScore::new(page.name.clone(), page.rank)
    }
}

impl fmt::Display for PageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:.5}", self.name, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_defaults_to_initial_rank() {
        let vote = Vote::new("go.md", 3);
        assert_eq!(vote.rank, INITIAL_RANK);
        assert_eq!(vote.weight, 3);
    }

    #[test]
    fn test_ranked_page_display() {
        let page = RankedPage::new(
            "README.md",
            vec![
                Vote::new("go.md", 3),
                Vote::new("java.md", 3),
                Vote::new("python.md", 3),
            ],
        );
        assert_eq!(
            page.to_string(),
            "README.md,1.00000,[ go.md, 1.00000, 3,  java.md, 1.00000, 3,  python.md, 1.00000, 3]"
        );
    }

    #[test]
    fn test_ranked_page_display_without_votes() {
        let page = RankedPage::with_rank("lonely.md", 0.15, Vec::new());
        assert_eq!(page.to_string(), "lonely.md,0.15000,[]");
        assert_eq!(page.out_degree(), 0);
    }

    #[test]
    fn test_page_score_display() {
        let score = PageScore::new("README.md", 1.918918);
        assert_eq!(score.to_string(), "README.md,1.91892");
    }
}
