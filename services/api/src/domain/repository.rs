#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::credential::StoredCredential;
use crate::domain::types::{
    Beach, BeachPost, Inform2Report, Inform4Report, SeedBeach, Submission, User,
};
use crate::error::ApiError;

/// Repository for login accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new account. Fails with `UsernameTaken` when the username
    /// already exists.
    async fn create(
        &self,
        username: &str,
        credential: &StoredCredential,
        created_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;
}

/// Repository for the beach catalog.
pub trait CatalogRepository: Send + Sync {
    /// All beaches, ordered by name.
    async fn list_beaches(&self) -> Result<Vec<Beach>, ApiError>;

    /// Posts of one beach, ordered by name. Empty when the beach is unknown.
    async fn list_posts(&self, beach_id: i32) -> Result<Vec<BeachPost>, ApiError>;

    async fn count_beaches(&self) -> Result<u64, ApiError>;

    /// Insert beaches and their posts in one transaction.
    async fn insert_catalog(&self, catalog: &[SeedBeach]) -> Result<(), ApiError>;
}

/// Append-only store for submitted reports.
pub trait ReportRepository: Send + Sync {
    /// Persist an Inform2 submission and return its generated id.
    async fn insert_inform2(&self, submission: &Submission<Inform2Report>)
    -> Result<i32, ApiError>;

    /// Persist an Inform4 submission and return its generated id.
    async fn insert_inform4(&self, submission: &Submission<Inform4Report>)
    -> Result<i32, ApiError>;
}
