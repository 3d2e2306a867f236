//! Result-list orchestration for one browse request.
//!
//! Decides which engine path produces the visible list for a
//! (query, filters) pair:
//! 1. non-blank query: rank the catalog, then narrow with the filters
//! 2. any active facet: filter the whole catalog
//! 3. otherwise: the trending subset

use crate::catalog::ToolRecord;
use crate::matching::accessors::trending_subset;
use crate::matching::filter::{apply, FilterState};
use crate::matching::scorer::rank;
use serde::Serialize;

/// Candidates ranked before facet filtering on the search path.
pub const DEFAULT_SEARCH_CANDIDATES: usize = 50;

/// Size of trending and new-tools sections.
pub const DEFAULT_SECTION_LIMIT: usize = 6;

/// Which path produced a browse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseMode {
    Search,
    Filtered,
    Trending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseLimits {
    pub search_candidates: usize,
    pub trending: usize,
}

impl Default for BrowseLimits {
    fn default() -> Self {
        Self {
            search_candidates: DEFAULT_SEARCH_CANDIDATES,
            trending: DEFAULT_SECTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseOutcome<'a> {
    pub mode: BrowseMode,
    pub tools: Vec<&'a ToolRecord>,
}

pub fn browse<'a>(
    query: &str,
    filters: &FilterState,
    catalog: &'a [ToolRecord],
    limits: BrowseLimits,
) -> BrowseOutcome<'a> {
    if !query.trim().is_empty() {
        let ranked = rank(query, catalog, limits.search_candidates);
        return BrowseOutcome {
            mode: BrowseMode::Search,
            tools: apply(ranked, filters),
        };
    }

    if filters.is_active() {
        return BrowseOutcome {
            mode: BrowseMode::Filtered,
            tools: apply(catalog, filters),
        };
    }

    BrowseOutcome {
        mode: BrowseMode::Trending,
        tools: trending_subset(catalog, limits.trending),
    }
}
