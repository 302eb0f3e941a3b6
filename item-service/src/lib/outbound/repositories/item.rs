use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::item::models::Item;
use crate::domain::item::models::ItemDraft;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::ports::ItemRepository;
use crate::domain::store::StoreError;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &PgRow) -> Result<Item, StoreError> {
        let backend = |e: sqlx::Error| StoreError::Backend(e.to_string());

        let id: i64 = row.try_get("id").map_err(backend)?;
        let name: String = row.try_get("name").map_err(backend)?;
        let price: f64 = row.try_get("price").map_err(backend)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(backend)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(backend)?;

        // Rows written outside this service may violate the invariants.
        Ok(Item {
            id: ItemId(id),
            name: ItemName::new(name).map_err(|e| StoreError::Backend(e.to_string()))?,
            price: Price::new(price).map_err(|e| StoreError::Backend(e.to_string()))?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, created_at, updated_at
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_item(&r),
            None => Err(StoreError::NotFound),
        }
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, price, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.price.value())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Self::row_to_item(&row)
    }

    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, price = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.price.value())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_item(&r),
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
