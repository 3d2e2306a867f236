pub mod catalog;
pub mod health;
pub mod search;

pub use catalog::{
    categories_handler, category_tools_handler, new_tools_handler, suggestion_handler,
    trending_handler,
};
pub use health::{health_handler, ready_handler};
pub use search::{rank_handler, search_handler};

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// All API routes, without middleware or the metrics endpoint.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", post(search_handler))
        .route("/rank", post(rank_handler))
        .route("/tools/trending", get(trending_handler))
        .route("/tools/new", get(new_tools_handler))
        .route("/categories", get(categories_handler))
        .route("/categories/:name/tools", get(category_tools_handler))
        .route("/suggestions/random", get(suggestion_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(state)
}
