//! In-memory link graph
//!
//! Holds the flat edge list produced by link extraction and hands it to the
//! ranking engine grouped by source page.

use super::extract::extract_links;
use super::types::LinkEdge;
use linkrank_algorithms::{group_by_key, PageId};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a link graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read page {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed link graph stored as an edge list.
///
/// Edge order is kept as inserted; it decides the order pages are grouped in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkGraph {
    edges: Vec<LinkEdge>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<LinkEdge>,
    {
        LinkGraph {
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    /// Read `pages` from `dir` and collect every link they contain.
    ///
    /// Each page's edges are attributed to its file name. Pages are read in
    /// parallel but their edges keep the order the pages were listed in.
    pub fn load_pages<P, S>(dir: P, pages: &[S]) -> GraphResult<Self>
    where
        P: AsRef<Path>,
        S: AsRef<str> + Sync,
    {
        let dir = dir.as_ref();
        info!("Loading {} pages from {:?}", pages.len(), dir);

        let per_page = pages
            .par_iter()
            .map(|page| -> GraphResult<Vec<LinkEdge>> {
                let page: &str = page.as_ref();
                let path = dir.join(page);
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| GraphError::Io { path: path.clone(), source })?;
                let edges = extract_links(page, &text);
                debug!("Extracted {} links from {:?}", edges.len(), path);
                Ok(edges)
            })
            .collect::<GraphResult<Vec<_>>>()?;

        let graph = LinkGraph {
            edges: per_page.into_iter().flatten().collect(),
        };
        info!("Loaded {} links across {} pages", graph.edge_count(), graph.page_count());
        let malformed = graph.malformed_count();
        if malformed > 0 {
            debug!("{} links have an empty target and will not vote", malformed);
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, source: impl Into<PageId>, target: impl Into<PageId>) {
        self.edges.push(LinkEdge::new(source, target));
    }

    pub fn edges(&self) -> &[LinkEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct page names appearing as a source or a target
    pub fn page_count(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .filter(|name| !name.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Edges whose target is empty
    pub fn malformed_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_malformed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Targets grouped by source page, in first-seen source order
    pub fn grouped(&self) -> Vec<(PageId, Vec<PageId>)> {
        group_by_key(
            self.edges
                .iter()
                .map(|e| (e.source.clone(), e.target.clone())),
        )
    }
}

impl Extend<LinkEdge> for LinkGraph {
    fn extend<I: IntoIterator<Item = LinkEdge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}
