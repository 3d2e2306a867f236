//! Search and ranking handlers.
//!
//! `/search` mirrors the browse page: it picks the search, filtered or
//! trending path from the request and returns the visible list. `/rank`
//! exposes the raw ranking with scores, before any facet filtering.

use crate::catalog::ToolRecord;
use crate::error::{AppError, Result};
use crate::matching::{browse, rank_tokens, tokenize, trending_subset, BrowseMode, FilterState};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; blank selects the filtered or trending path
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: FilterState,
    /// Optional cap on the returned list; non-positive yields no results
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub mode: BrowseMode,
    pub total: usize,
    pub results: Vec<ToolRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedTool>,
}

#[derive(Debug, Serialize)]
pub struct RankedTool {
    pub tool: ToolRecord,
    /// Absent when the query had no usable tokens and trending was returned
    pub score: Option<f32>,
}

/// Convert a client-supplied limit; anything below zero means "nothing".
pub(crate) fn effective_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(limit) => usize::try_from(limit).unwrap_or(0),
        None => default,
    }
}

fn validate_query(state: &AppState, query: &str) -> Result<()> {
    let max = state.config.max_query_length;
    if query.chars().count() > max {
        return Err(AppError::ValidationError(format!(
            "Query exceeds maximum length of {} characters",
            max
        )));
    }
    Ok(())
}

/// POST /search - Visible result list for a query and filter selection.
///
/// # Flow
/// 1. Non-blank query: rank the catalog (bounded by `SEARCH_CANDIDATES`),
///    then apply the filters
/// 2. Blank query with active filters: filter the whole catalog
/// 3. Otherwise: trending tools
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let start_time = std::time::Instant::now();

    validate_query(&state, &request.query)?;
    validate_query(&state, &request.filters.search_query)?;

    let outcome = browse(
        &request.query,
        &request.filters,
        state.catalog.tools(),
        state.config.browse_limits(),
    );

    let total = outcome.tools.len();
    let limit = effective_limit(request.limit, total);
    let results: Vec<ToolRecord> = outcome.tools.into_iter().take(limit).cloned().collect();

    tracing::info!(
        query = %request.query,
        mode = ?outcome.mode,
        total,
        returned = results.len(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "Search completed"
    );

    metrics::counter!("search_requests_total").increment(1);
    metrics::histogram!("search_results").record(total as f64);

    Ok(Json(SearchResponse {
        mode: outcome.mode,
        total,
        results,
    }))
}

/// POST /rank - Ranked tools with their relevance scores.
pub async fn rank_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>> {
    validate_query(&state, &request.query)?;

    let catalog = state.catalog.tools();
    let limit = effective_limit(request.limit, state.config.search_candidates);
    let tokens = tokenize(&request.query);

    let results: Vec<RankedTool> = if tokens.is_empty() {
        trending_subset(catalog, limit)
            .into_iter()
            .map(|tool| RankedTool {
                tool: tool.clone(),
                score: None,
            })
            .collect()
    } else {
        rank_tokens(&tokens, catalog, limit)
            .into_iter()
            .map(|candidate| RankedTool {
                tool: candidate.tool.clone(),
                score: Some(candidate.score),
            })
            .collect()
    };

    metrics::counter!("rank_requests_total").increment(1);

    Ok(Json(RankResponse { results }))
}
