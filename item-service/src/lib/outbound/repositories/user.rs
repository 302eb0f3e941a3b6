use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::store::StoreError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, StoreError> {
        let backend = |e: sqlx::Error| StoreError::Backend(e.to_string());

        let id: Uuid = row.try_get("id").map_err(backend)?;
        let username: String = row.try_get("username").map_err(backend)?;
        let password_hash: String = row.try_get("password_hash").map_err(backend)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(backend)?;

        Ok(User {
            id: UserId(id),
            username: Username::new(username).map_err(|e| StoreError::Backend(e.to_string()))?,
            password_hash,
            created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_user(&r),
            None => Err(StoreError::NotFound),
        }
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key")
                {
                    return StoreError::Conflict(user.username.as_str().to_string());
                }
            }
            StoreError::Backend(e.to_string())
        })?;

        Ok(user)
    }
}
