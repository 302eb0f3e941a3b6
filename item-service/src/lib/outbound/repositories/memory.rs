use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::item::models::Item;
use crate::domain::item::models::ItemDraft;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemRepository;
use crate::domain::store::StoreError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Process-local user store keyed by username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<User, StoreError> {
        self.users
            .read()
            .await
            .get(username.as_str())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let key = user.username.as_str().to_string();

        if users.contains_key(&key) {
            return Err(StoreError::Conflict(key));
        }

        users.insert(key, user.clone());
        Ok(user)
    }
}

#[derive(Default)]
struct ItemTable {
    last_id: i64,
    rows: BTreeMap<ItemId, Item>,
}

/// Process-local item store with sequential IDs starting at 1.
#[derive(Default)]
pub struct InMemoryItemRepository {
    table: RwLock<ItemTable>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Item, StoreError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let item = Item {
            id: ItemId(table.last_id),
            name: draft.name,
            price: draft.price,
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn save(&self, mut item: Item) -> Result<Item, StoreError> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&item.id).ok_or(StoreError::NotFound)?;

        item.created_at = stored.created_at;
        item.updated_at = Utc::now();
        *stored = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
