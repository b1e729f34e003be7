//! Dashboard handler
//!
//! The one real endpoint: fetch a user's tweets, merge in replies, render
//! the batch as RSS and send the document back.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::{AppError, FeedError};
use crate::feed::{render_feed, FEED_FILE_NAME};
use crate::AppState;

/// Query parameters for the dashboard feed
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub user: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    30
}

/// GET /dashboard.xml?user=<handle>&limit=<n>
///
/// Validates the handle, drives the pipeline and streams the rendered
/// document back. Fails fast: the first error at any stage ends the
/// request, no partial response.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let user = query
        .user
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("No user handle found in get param".to_string()))?;

    tracing::info!("getting data for {}", user);

    let tweets = state.dashboard.generate(&user, query.limit).await?;
    let dir = render_feed(&user, &tweets)?;

    let body = tokio::fs::read(dir.join(FEED_FILE_NAME))
        .await
        .map_err(FeedError::from)?;

    Ok((
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        body,
    )
        .into_response())
}
