//! Feed rendering
//!
//! Serializes a correlated tweet batch into an RSS document on disk.

pub mod renderer;

pub use renderer::{render_feed, FEED_FILE_NAME};
