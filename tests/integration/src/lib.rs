//! Integration test utilities for the launchpad API
//!
//! Spawns the real server against PostgreSQL and Redis and drives it over
//! HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
