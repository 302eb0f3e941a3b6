use async_trait::async_trait;

use super::errors::ItemError;
use super::models::Item;
use super::models::ItemDraft;
use super::models::ItemId;
use super::models::ItemPatch;
use crate::domain::store::StoreError;

/// Port for item operations behind the authorization gate.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// List every item ordered by ID.
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Store` - Store operation failed
    async fn get_item(&self, id: ItemId) -> Result<Item, ItemError>;

    /// # Errors
    /// * `Store` - Store operation failed
    async fn create_item(&self, draft: ItemDraft) -> Result<Item, ItemError>;

    /// Apply a partial update to an existing item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Store` - Store operation failed
    async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ItemError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Store` - Store operation failed
    async fn delete_item(&self, id: ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for item records.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Retrieve all items ordered by ID.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Retrieve one item.
    ///
    /// # Errors
    /// * `NotFound` - No item with this ID
    /// * `Backend` - Store operation failed
    async fn find_by_id(&self, id: ItemId) -> Result<Item, StoreError>;

    /// Persist a new item; the store assigns the ID and timestamps.
    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError>;

    /// Overwrite an existing item and refresh its update timestamp.
    ///
    /// # Errors
    /// * `NotFound` - No item with this ID
    /// * `Backend` - Store operation failed
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Remove an item.
    ///
    /// # Errors
    /// * `NotFound` - No item with this ID
    /// * `Backend` - Store operation failed
    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;
}
