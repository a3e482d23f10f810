//! PageRank by vote propagation
//!
//! Each round is a map stage (every page emits one contribution per vote),
//! a keyed shuffle on the receiving page, and a reduce stage that folds the
//! contributions into a fresh record. Rounds run a fixed number of times;
//! there is no convergence check.

use super::common::{PageId, PageScore, RankedPage, Vote};
use super::shuffle::group_by_key;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while ranking
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    #[error("Vote from {voter} to {target} carries a zero out-degree")]
    ZeroOutDegree { target: PageId, voter: PageId },

    #[error("Damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDampingFactor(f64),

    #[error("Iteration count must be positive, got {0}")]
    InvalidIterationCount(usize),
}

pub type RankResult<T> = Result<T, RankError>;

/// What the reducer does with a vote whose weight is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ZeroDegreePolicy {
    /// Drop the vote: no rank term, not carried into the next round
    #[default]
    Skip,
    /// Abort the round with [`RankError::ZeroOutDegree`]
    Fail,
}

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of propagation rounds
    pub iterations: usize,
    pub zero_degree: ZeroDegreePolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 40,
            zero_degree: ZeroDegreePolicy::Skip,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> RankResult<()> {
        let d = self.damping_factor;
        if d.is_nan() || d <= 0.0 || d >= 1.0 {
            return Err(RankError::InvalidDampingFactor(d));
        }
        if self.iterations == 0 {
            return Err(RankError::InvalidIterationCount(self.iterations));
        }
        Ok(())
    }
}

/// A contribution keyed by the page that receives it
pub type Contribution = (PageId, RankedPage);

/// Build the round-0 record for one source page.
///
/// Every vote carries the full target count as its weight, including empty
/// targets, which are dropped here.
pub fn build_page(source: PageId, targets: Vec<PageId>) -> RankedPage {
    let out_degree = targets.len();
    let votes = targets
        .into_iter()
        .filter(|target| !target.is_empty())
        .map(|target| Vote::new(target, out_degree))
        .collect();
    RankedPage::new(source, votes)
}

/// Build round-0 state from edges already grouped by source page
pub fn build_graph<I>(groups: I) -> Vec<RankedPage>
where
    I: IntoIterator<Item = (PageId, Vec<PageId>)>,
{
    let groups: Vec<_> = groups.into_iter().collect();
    groups
        .into_par_iter()
        .map(|(source, targets)| build_page(source, targets))
        .collect()
}

/// Re-key a page's votes by the page each vote points at.
///
/// The out-degree is counted from the record itself, so a record without
/// votes emits nothing.
pub fn contributions(page: &RankedPage) -> Vec<Contribution> {
    let out_degree = page.out_degree();
    page.votes
        .iter()
        .map(|vote| {
            let carried = Vote::with_rank(page.name.clone(), page.rank, out_degree);
            (
                vote.name.clone(),
                RankedPage::with_rank(vote.name.clone(), vote.rank, vec![carried]),
            )
        })
        .collect()
}

/// Fold every contribution received by `target` into its next record.
///
/// The received votes become the new record's votes, so after a round a
/// record lists the pages that voted for it, not the pages it links to.
pub fn reduce_votes(
    target: PageId,
    received: Vec<RankedPage>,
    config: &PageRankConfig,
) -> RankResult<RankedPage> {
    let d = config.damping_factor;
    let mut rank = 1.0 - d;
    let mut votes = Vec::new();

    for contribution in received {
        for vote in contribution.votes {
            if vote.weight == 0 {
                match config.zero_degree {
                    ZeroDegreePolicy::Skip => {
                        warn!("Skipping zero-degree vote from {} to {}", vote.name, target);
                        continue;
                    }
                    ZeroDegreePolicy::Fail => {
                        return Err(RankError::ZeroOutDegree {
                            target,
                            voter: vote.name,
                        });
                    }
                }
            }
            rank += d * vote.rank / vote.weight as f64;
            votes.push(vote);
        }
    }

    Ok(RankedPage::with_rank(target, rank, votes))
}

/// The complete record set of one round
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    index: usize,
    pages: Vec<RankedPage>,
}

impl Round {
    /// Round 0, as produced by [`build_graph`]
    pub fn initial(pages: Vec<RankedPage>) -> Self {
        Round { index: 0, pages }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pages(&self) -> &[RankedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RankedPage> {
        self.pages
    }

    /// Look up a page's record in this round
    pub fn page(&self, name: &str) -> Option<&RankedPage> {
        self.pages.iter().find(|p| p.name == name)
    }

    /// Run one map -> shuffle -> reduce pass, consuming this round
    pub fn advance(self, config: &PageRankConfig) -> RankResult<Round> {
        let emitted: Vec<Contribution> = self
            .pages
            .par_iter()
            .flat_map_iter(contributions)
            .collect();
        let emitted_count = emitted.len();

        let grouped = group_by_key(emitted);
        let pages = grouped
            .into_par_iter()
            .map(|(target, received)| reduce_votes(target, received, config))
            .collect::<RankResult<Vec<_>>>()?;

        debug!(
            "Round {}: {} contributions -> {} pages",
            self.index + 1,
            emitted_count,
            pages.len()
        );

        Ok(Round {
            index: self.index + 1,
            pages,
        })
    }
}

/// Advance round-0 state `config.iterations` times
pub fn run_rounds(initial: Vec<RankedPage>, config: &PageRankConfig) -> RankResult<Round> {
    config.validate()?;

    let mut round = Round::initial(initial);
    for _ in 0..config.iterations {
        round = round.advance(config)?;
    }
    Ok(round)
}

/// Calculate PageRank over edges grouped by source page.
///
/// Returns the final round's records.
pub fn page_rank<I>(groups: I, config: PageRankConfig) -> RankResult<Vec<RankedPage>>
where
    I: IntoIterator<Item = (PageId, Vec<PageId>)>,
{
    let initial = build_graph(groups);
    info!(
        "Ranking {} pages over {} rounds (damping {})",
        initial.len(),
        config.iterations,
        config.damping_factor
    );

    let round = run_rounds(initial, &config)?;
    info!("Finished {} rounds with {} ranked pages", round.index(), round.pages().len());
    Ok(round.into_pages())
}

/// Project records to `(page, rank)` pairs
pub fn extract_ranks(pages: &[RankedPage]) -> Vec<PageScore> {
    pages.par_iter().map(PageScore::from).collect()
}

/// Select the pair with the largest rank.
///
/// On a tie the earliest pair in `scores` wins. `None` when `scores` is empty.
pub fn max_rank(scores: &[PageScore]) -> Option<PageScore> {
    scores
        .par_iter()
        .cloned()
        .reduce_with(|best, next| if next.rank > best.rank { next } else { best })
}

/// Run the whole pipeline down to the single highest-ranked page
pub fn top_page<I>(groups: I, config: PageRankConfig) -> RankResult<Option<PageScore>>
where
    I: IntoIterator<Item = (PageId, Vec<PageId>)>,
{
    let pages = page_rank(groups, config)?;
    Ok(max_rank(&extract_ranks(&pages)))
}
