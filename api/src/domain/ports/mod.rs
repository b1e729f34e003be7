//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod twitter;

pub use twitter::{SearchResponse, SearchStatus, TimelineStatus, TwitterClient};
