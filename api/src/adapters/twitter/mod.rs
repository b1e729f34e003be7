//! Twitter adapter
//!
//! Implementation of the Twitter API client.

pub mod client;

pub use client::TwitterClientImpl;
