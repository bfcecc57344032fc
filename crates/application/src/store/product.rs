//! Product domain store.

use serde_json::Value;
use tokio::sync::RwLock;

use agora_domain::{NewProduct, Page, Product, ProductQuery, ProductUpdate, catalog};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::store::entity::EntityStore;

/// Cached product views plus the actions that refresh them.
///
/// Keeps two list views: the shared search results (`state().list`) and
/// the caller's own published products (`mine()`), which would otherwise
/// clobber each other.
#[derive(Debug)]
pub struct ProductStore {
    client: ApiClient,
    entity: EntityStore<Product>,
    mine: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Creates the store over a shared pipeline.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            entity: EntityStore::new(),
            mine: RwLock::new(Vec::new()),
        }
    }

    /// The cached detail/search views.
    #[must_use]
    pub fn state(&self) -> &EntityStore<Product> {
        &self.entity
    }

    /// The caller's own published products, as of the last `fetch_mine`.
    pub async fn mine(&self) -> Vec<Product> {
        self.mine.read().await.clone()
    }

    /// Publishes a new product. Does not touch cached views; callers
    /// decide whether to refresh.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn create(&self, product: &NewProduct) -> ApiResult<Product> {
        self.client
            .execute_with_body(catalog::product::create(), product)
            .await
    }

    /// Fetches one product and overwrites the cached detail view.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the detail view is untouched on
    /// failure.
    pub async fn fetch_detail(&self, id: i64) -> ApiResult<Product> {
        let product: Product = self.client.execute(catalog::product::detail(id)).await?;
        self.entity.set_current(product.clone()).await;
        Ok(product)
    }

    /// Searches products, tracking the loading flag, and overwrites the
    /// cached list view with the results.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the loading flag is cleared on
    /// both outcomes and the list view is untouched on failure.
    pub async fn search(&self, query: &ProductQuery) -> ApiResult<Page<Product>> {
        self.entity.begin_load().await;
        let result: ApiResult<Page<Product>> = self
            .client
            .execute_with_query(catalog::product::search(), query)
            .await;
        match result {
            Ok(page) => {
                self.entity
                    .complete_load(page.content.clone(), page.total)
                    .await;
                Ok(page)
            }
            Err(err) => {
                self.entity.abort_load().await;
                Err(err)
            }
        }
    }

    /// Updates a product. Cached views are left alone; a stale detail view
    /// is refreshed by the next `fetch_detail`.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn update(&self, id: i64, update: &ProductUpdate) -> ApiResult<Product> {
        self.client
            .execute_with_body(catalog::product::update(id), update)
            .await
    }

    /// Deletes a product. Does not prune cached lists; callers decide.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let _: Value = self.client.execute(catalog::product::delete(id)).await?;
        Ok(())
    }

    /// Fetches the caller's own products into the separate `mine` view.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the view is untouched on failure.
    pub async fn fetch_mine(&self, query: &ProductQuery) -> ApiResult<Page<Product>> {
        let page: Page<Product> = self
            .client
            .execute_with_query(catalog::product::mine(), query)
            .await?;
        *self.mine.write().await = page.content.clone();
        Ok(page)
    }
}
