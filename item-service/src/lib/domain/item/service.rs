use std::sync::Arc;

use async_trait::async_trait;

use super::errors::ItemError;
use super::models::Item;
use super::models::ItemDraft;
use super::models::ItemId;
use super::models::ItemPatch;
use super::ports::ItemRepository;
use super::ports::ItemServicePort;
use crate::domain::store::StoreError;

/// Concrete implementation of ItemServicePort.
///
/// Inputs arrive already validated; this layer maps store outcomes onto
/// domain errors and records an audit event per operation.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }

    async fn load(&self, id: ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_error(id, e))
    }
}

fn store_error(id: ItemId, err: StoreError) -> ItemError {
    match err {
        StoreError::NotFound => ItemError::NotFound(id),
        other => ItemError::Store(other.to_string()),
    }
}

fn log_outcome<T>(action: &'static str, item_id: Option<ItemId>, result: &Result<T, ItemError>) {
    let item_id = item_id.map(|id| id.0).unwrap_or(0);
    match result {
        Ok(_) => tracing::info!(action, item_id, outcome = "success"),
        Err(e @ ItemError::Store(_)) => {
            tracing::error!(action, item_id, outcome = "failed", error = %e)
        }
        Err(e) => tracing::warn!(action, item_id, outcome = "rejected", reason = %e),
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        let result = self
            .repository
            .find_all()
            .await
            .map_err(|e| ItemError::Store(e.to_string()));
        log_outcome("list_items", None, &result);
        result
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, ItemError> {
        let result = self.load(id).await;
        log_outcome("get_item", Some(id), &result);
        result
    }

    async fn create_item(&self, draft: ItemDraft) -> Result<Item, ItemError> {
        let result = self
            .repository
            .create(draft)
            .await
            .map_err(|e| ItemError::Store(e.to_string()));
        log_outcome("create_item", result.as_ref().ok().map(|item| item.id), &result);
        result
    }

    async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ItemError> {
        let result = async {
            let mut item = self.load(id).await?;
            item.apply(patch);
            self.repository
                .save(item)
                .await
                .map_err(|e| store_error(id, e))
        }
        .await;
        log_outcome("update_item", Some(id), &result);
        result
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ItemError> {
        let result = async {
            self.load(id).await?;
            self.repository
                .delete(id)
                .await
                .map_err(|e| store_error(id, e))
        }
        .await;
        log_outcome("delete_item", Some(id), &result);
        result
    }
}
