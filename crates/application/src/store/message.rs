//! Message domain store.

use serde_json::Value;

use agora_domain::{Message, NewMessage, catalog};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::store::entity::EntityStore;

/// Cached message views plus the actions that refresh them. The list view
/// holds the most recently fetched conversation.
#[derive(Debug)]
pub struct MessageStore {
    client: ApiClient,
    entity: EntityStore<Message>,
}

impl MessageStore {
    /// Creates the store over a shared pipeline.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            entity: EntityStore::new(),
        }
    }

    /// The cached detail/conversation views.
    #[must_use]
    pub fn state(&self) -> &EntityStore<Message> {
        &self.entity
    }

    /// Sends a message. Cached views are untouched; callers refresh the
    /// conversation to see it.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn send(&self, message: &NewMessage) -> ApiResult<Message> {
        self.client
            .execute_with_body(catalog::message::send(), message)
            .await
    }

    /// Fetches one message and overwrites the cached detail view.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the detail view is untouched on
    /// failure.
    pub async fn fetch_detail(&self, id: i64) -> ApiResult<Message> {
        let message: Message = self.client.execute(catalog::message::detail(id)).await?;
        self.entity.set_current(message.clone()).await;
        Ok(message)
    }

    /// Fetches a conversation's messages, tracking the loading flag.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection; the loading flag is cleared on
    /// both outcomes and the list view is untouched on failure.
    pub async fn fetch_conversation(&self, conversation_id: i64) -> ApiResult<Vec<Message>> {
        self.entity.begin_load().await;
        let result: ApiResult<Vec<Message>> = self
            .client
            .execute(catalog::message::conversation(conversation_id))
            .await;
        match result {
            Ok(messages) => {
                let total = messages.len() as u64;
                self.entity.complete_load(messages.clone(), total).await;
                Ok(messages)
            }
            Err(err) => {
                self.entity.abort_load().await;
                Err(err)
            }
        }
    }

    /// Marks a message as read. Cached views are untouched.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn mark_read(&self, id: i64) -> ApiResult<()> {
        let _: Value = self.client.execute(catalog::message::mark_read(id)).await?;
        Ok(())
    }

    /// Deletes a message. Does not prune the cached conversation.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline rejection.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        let _: Value = self.client.execute(catalog::message::delete(id)).await?;
        Ok(())
    }
}
