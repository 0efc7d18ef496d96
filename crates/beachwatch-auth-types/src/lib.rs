//! Auth types shared across Beachwatch crates.
//!
//! Provides JWT issue/validation and the `BearerIdentity` extractor.

pub mod bearer;
pub mod token;
