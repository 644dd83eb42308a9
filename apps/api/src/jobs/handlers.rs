//! Axum route handlers for the feed and search proxies.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::{map_feed, JobItem, JobsFeed};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub page: Option<u32>,
}

/// GET /api/jobs
///
/// Proxies the public remote-jobs feed into ticker items.
pub async fn handle_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobItem>>, AppError> {
    let response = state
        .http
        .get(&state.config.jobs_feed_url)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to fetch jobs feed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Jobs feed returned {}",
            response.status()
        )));
    }

    let feed: JobsFeed = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("Jobs feed body was not valid JSON: {e}")))?;

    Ok(Json(map_feed(feed)))
}

/// POST /search-jobs?query&location&page
///
/// Forwards the query string to the external search service and relays its
/// JSON body unchanged. `page` passes straight through.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut forwarded: Vec<(&str, String)> = Vec::new();
    if let Some(query) = &params.query {
        forwarded.push(("query", query.clone()));
    }
    if let Some(location) = &params.location {
        forwarded.push(("location", location.clone()));
    }
    if let Some(page) = params.page {
        forwarded.push(("page", page.to_string()));
    }

    let response = state
        .http
        .post(&state.config.search_api_url)
        .query(&forwarded)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Search request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "Search service returned {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("Search response was not valid JSON: {e}")))?;

    Ok(Json(body))
}
