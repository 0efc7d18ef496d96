//! Shared plumbing for Beachwatch services: configuration loading, tracing,
//! request ids and liveness.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
