//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod dashboard_service;

pub use dashboard_service::{merge_replies, min_max_id, DashboardService};
