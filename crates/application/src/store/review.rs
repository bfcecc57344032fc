//! Review domain store.

use serde_json::Value;

use agora_domain::{NewReview, Review, catalog};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::store::entity::EntityStore;

/// Cached review views plus the actions that refresh them. Reviews have no
/// list operation, so only the detail view is populated.
#[derive(Debug)]
pub struct ReviewStore {
    client: ApiClient,
    entity: EntityStore<Review>,
}

impl ReviewStore {
    /// Creates the store over a shared pipeline.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            entity: EntityStore::new(),
        }
    }

    /// The cached detail view.
    #[must_use]
    pub fn state(&self) -> &EntityStore<Review> {
        &self.entity
    }

    /// Creates a review. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn create(&self, review: &NewReview) -> ApiResult<Review> {
        self.client
            .execute_with_body(catalog::review::create(), review)
            .await
    }

    /// Fetches one review and overwrites the cached detail view.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the detail view is untouched on
    /// failure.
    pub async fn fetch_detail(&self, id: i64) -> ApiResult<Review> {
        let review: Review = self.client.execute(catalog::review::detail(id)).await?;
        self.entity.set_current(review.clone()).await;
        Ok(review)
    }

    /// Deletes a review. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let _: Value = self.client.execute(catalog::review::delete(id)).await?;
        Ok(())
    }
}
