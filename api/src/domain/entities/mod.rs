//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod tweet;

pub use tweet::{ReplyGroups, Tweet};
