//! Integration test utilities for the item service
//!
//! Spawns the full HTTP application on an ephemeral port and drives it with
//! a real HTTP client.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
