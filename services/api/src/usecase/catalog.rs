use crate::domain::repository::CatalogRepository;
use crate::domain::types::{Beach, BeachPost, SeedBeach};
use crate::error::ApiError;

pub struct ListBeachesUseCase<R: CatalogRepository> {
    pub catalog: R,
}

impl<R: CatalogRepository> ListBeachesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Beach>, ApiError> {
        self.catalog.list_beaches().await
    }
}

pub struct ListBeachPostsUseCase<R: CatalogRepository> {
    pub catalog: R,
}

impl<R: CatalogRepository> ListBeachPostsUseCase<R> {
    /// `beach_id` is taken verbatim from the path. An id that cannot name a
    /// beach yields an empty list, same as an unknown one.
    pub async fn execute(&self, beach_id: &str) -> Result<Vec<BeachPost>, ApiError> {
        match beach_id.parse::<i32>() {
            Ok(id) => self.catalog.list_posts(id).await,
            Err(_) => Ok(Vec::new()),
        }
    }
}

pub struct SeedCatalogUseCase<R: CatalogRepository> {
    pub catalog: R,
}

impl<R: CatalogRepository> SeedCatalogUseCase<R> {
    /// Insert `seed` if the catalog has no beaches. Returns whether it did.
    ///
    /// Count-then-insert: two processes starting at once can both seed.
    pub async fn execute(&self, seed: &[SeedBeach]) -> Result<bool, ApiError> {
        if self.catalog.count_beaches().await? > 0 {
            return Ok(false);
        }
        self.catalog.insert_catalog(seed).await?;
        tracing::info!(beaches = seed.len(), "sample beaches and beach posts created");
        Ok(true)
    }
}
