use async_trait::async_trait;

use crate::domain::store::StoreError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `Backend` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<User, StoreError>;

    /// Persist a new user.
    ///
    /// # Errors
    /// * `Conflict` - Username is already taken
    /// * `Backend` - Store operation failed
    async fn create(&self, user: User) -> Result<User, StoreError>;
}
