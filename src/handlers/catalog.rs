//! Catalog browsing handlers: trending and new sections, the category grid,
//! per-category listings and search suggestions.

use crate::catalog::{Category, CategorySummary, ToolRecord};
use crate::handlers::search::effective_limit;
use crate::matching::{category_subset, new_subset, trending_subset};
use crate::state::AppState;
use crate::suggestions::random_suggestion;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub results: Vec<ToolRecord>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct CategoryToolsResponse {
    pub category: String,
    pub results: Vec<ToolRecord>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: &'static str,
}

fn owned(tools: Vec<&ToolRecord>) -> Vec<ToolRecord> {
    tools.into_iter().cloned().collect()
}

/// GET /tools/trending - Highest rated trending tools
pub async fn trending_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<ToolListResponse> {
    let limit = effective_limit(params.limit, state.config.trending_limit);
    Json(ToolListResponse {
        results: owned(trending_subset(state.catalog.tools(), limit)),
    })
}

/// GET /tools/new - Highest rated recently added tools
pub async fn new_tools_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<ToolListResponse> {
    let limit = effective_limit(params.limit, state.config.new_tools_limit);
    Json(ToolListResponse {
        results: owned(new_subset(state.catalog.tools(), limit)),
    })
}

/// GET /categories - Category grid with tool counts
pub async fn categories_handler(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// GET /categories/:name/tools - Every tool in one category, by rating.
///
/// An unknown category name yields an empty list rather than an error.
pub async fn category_tools_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<CategoryToolsResponse> {
    let results = match name.parse::<Category>() {
        Ok(category) => owned(category_subset(state.catalog.tools(), category)),
        Err(e) => {
            tracing::debug!(error = %e, "Category lookup matched nothing");
            Vec::new()
        }
    };

    Json(CategoryToolsResponse {
        category: name,
        results,
    })
}

/// GET /suggestions/random - One example query for the search box
pub async fn suggestion_handler() -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        suggestion: random_suggestion(),
    })
}
