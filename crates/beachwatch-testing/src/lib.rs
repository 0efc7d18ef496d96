//! Test utilities for Beachwatch services.
//!
//! Import from dev-dependencies only.

pub mod auth;
