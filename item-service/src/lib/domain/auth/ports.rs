use async_trait::async_trait;
use auth::TokenPair;

use super::errors::AuthError;
use super::models::Credentials;
use crate::domain::user::models::User;

/// Port for the register/login/refresh flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `Validation` - Username or password is empty
    /// * `Conflict` - Username is already taken
    /// * `Store` - Username lookup failed
    /// * `Internal` - Hashing or persistence failed
    async fn register(&self, credentials: Credentials) -> Result<User, AuthError>;

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `Validation` - Username or password is empty
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Store` - User lookup failed
    /// * `Internal` - Token issuance failed
    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `Validation` - Token string is empty
    /// * `InvalidToken` - Token is invalid, expired, or not a refresh token
    /// * `Internal` - Token issuance failed
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError>;
}
