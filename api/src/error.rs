//! Unified error types for the tweetdash API
//!
//! This module defines error types for each layer:
//! - `TwitterError`: Twitter API client errors
//! - `FeedError`: Feed rendering errors
//! - `AppError`: Application layer errors (wraps inner errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Twitter API client errors
#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("CONSUMER_KEY / CONSUMER_SECRET key not found")]
    MissingCredentials,

    #[error("Invalid API Keys")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("Twitter API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed rendering errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Twitter(#[from] TwitterError),

    #[error("{0}")]
    Feed(#[from] FeedError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    error: String,
    traceback: String,
}

/// Render an error and its source chain as a flat string, the closest
/// analogue to a stack trace this service exposes.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

impl IntoResponse for AppError {
    // Every failure collapses to a 400 with a debugging-oriented JSON body.
    // Permissive on purpose: this is an internal tool and callers only need
    // to know the request did not produce a feed.
    fn into_response(self) -> Response {
        tracing::error!("dashboard request failed: {}", self);

        let body = Json(ErrorResponse {
            code: 400,
            error: self.to_string(),
            traceback: error_chain(&self),
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
