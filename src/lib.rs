//! Toolfinder - keyword-ranked, facet-filtered AI tool catalog
//!
//! This library exposes the matching engine and the service components,
//! enabling integration tests and embedding the engine in other front ends.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod matching;
pub mod state;
pub mod suggestions;

// Re-export key types for convenience
pub use catalog::{Catalog, Category, CategorySummary, Pricing, ToolRecord};
pub use config::Config;
pub use error::{AppError, Result};
pub use handlers::router;
pub use matching::{
    apply, browse, category_subset, new_subset, rank, trending_subset, BrowseMode, Facet,
    FilterState,
};
pub use state::AppState;
