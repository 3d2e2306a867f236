//! Tool matching engine: keyword ranking, facet filtering and the
//! rating-ordered subset accessors.
//!
//! Every function here is pure. Inputs are borrowed and results are fresh
//! vectors of references into the caller's catalog.

pub mod accessors;
pub mod browse;
pub mod filter;
pub mod scorer;
pub mod tokenize;

pub use accessors::{category_subset, new_subset, sort_by_rating_desc, trending_subset};
pub use browse::{browse, BrowseLimits, BrowseMode, BrowseOutcome};
pub use filter::{apply, Facet, FilterState};
pub use scorer::{rank, rank_tokens, score_tool, ScoredTool};
pub use tokenize::tokenize;
