//! Order domain store.

use serde_json::Value;

use agora_domain::{NewOrder, Order, OrderStatus, OrderStatusUpdate, catalog};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::store::entity::EntityStore;

/// Cached order views plus the actions that refresh them.
#[derive(Debug)]
pub struct OrderStore {
    client: ApiClient,
    entity: EntityStore<Order>,
}

impl OrderStore {
    /// Creates the store over a shared pipeline.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            entity: EntityStore::new(),
        }
    }

    /// The cached detail/list views.
    #[must_use]
    pub fn state(&self) -> &EntityStore<Order> {
        &self.entity
    }

    /// Places a new order. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn create(&self, order: &NewOrder) -> ApiResult<Order> {
        self.client
            .execute_with_body(catalog::order::create(), order)
            .await
    }

    /// Fetches one order and overwrites the cached detail view.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the detail view is untouched on
    /// failure.
    pub async fn fetch_detail(&self, id: i64) -> ApiResult<Order> {
        let order: Order = self.client.execute(catalog::order::detail(id)).await?;
        self.entity.set_current(order.clone()).await;
        Ok(order)
    }

    /// Fetches the caller's orders, tracking the loading flag. The backend
    /// returns a plain array here, so `total` is the list length.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the loading flag is cleared on
    /// both outcomes and the list view is untouched on failure.
    pub async fn fetch_mine(&self) -> ApiResult<Vec<Order>> {
        self.entity.begin_load().await;
        let result: ApiResult<Vec<Order>> = self.client.execute(catalog::order::mine()).await;
        match result {
            Ok(orders) => {
                let total = orders.len() as u64;
                self.entity.complete_load(orders.clone(), total).await;
                Ok(orders)
            }
            Err(err) => {
                self.entity.abort_load().await;
                Err(err)
            }
        }
    }

    /// Advances an order's status. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> ApiResult<Order> {
        self.client
            .execute_with_body(
                catalog::order::update_status(id),
                &OrderStatusUpdate { status },
            )
            .await
    }

    /// Cancels an order. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn cancel(&self, id: i64) -> ApiResult<()> {
        let _: Value = self.client.execute(catalog::order::cancel(id)).await?;
        Ok(())
    }
}
