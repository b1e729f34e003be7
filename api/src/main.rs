//! tweetdash API server
//!
//! Fetches a user's recent tweets and their replies from the Twitter API and
//! serves the merged result as an RSS feed. One endpoint, one pass, no state
//! beyond the cached bearer token.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::TwitterClientImpl;
use app::DashboardService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService<TwitterClientImpl>>,
}

/// GET /public/hc - liveness probe
async fn healthcheck() -> &'static str {
    "OK"
}

/// Build the application router for the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard.xml", get(handlers::get_dashboard))
        .route("/public/hc", get(healthcheck))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tweetdash_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tweetdash API...");

    // Load configuration; missing credentials only surface at the first
    // auth attempt, not here
    let config = Config::from_env();

    let twitter = Arc::new(TwitterClientImpl::new(&config));
    let dashboard = Arc::new(DashboardService::new(twitter));

    let state = AppState { dashboard };
    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
