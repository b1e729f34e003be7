//! Test utilities
//!
//! Manual mock of the Twitter port and fixture factories for unit testing.
//! Manual mocks keep the configured behavior explicit and debuggable; the
//! adapter itself is covered separately against a wiremock server.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
