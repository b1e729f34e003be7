//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod dashboard;

pub use dashboard::get_dashboard;
