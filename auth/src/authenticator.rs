use std::sync::OnceLock;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::tokens::TokenLifetimes;
use crate::tokens::TokenPair;
use crate::tokens::TokenService;

/// Authentication coordinator combining password verification and token issuance.
#[derive(Debug)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
    decoy_hash: OnceLock<String>,
}

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-users";

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator signing with `jwt_secret`.
    pub fn new(jwt_secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(jwt_secret, lifetimes),
            decoy_hash: OnceLock::new(),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.token_service
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        stored_hash: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue_pair(username)?)
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// The refresh token is left untouched and stays usable until it expires.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token is invalid, expired, or not a refresh token
    /// * `EncodingFailed` - New access token could not be signed
    pub fn refresh(&self, refresh_token: &str) -> Result<(Claims, String), JwtError> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        let access_token = self.token_service.issue_access_token(claims.username())?;
        Ok((claims, access_token))
    }

    /// Reject a login for a username with no stored hash.
    ///
    /// Runs a full verification against a fixed decoy hash first, so an
    /// unknown username costs as much as a wrong password.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, self.decoy_hash());
        AuthenticationError::InvalidCredentials
    }

    fn decoy_hash(&self) -> &str {
        self.decoy_hash.get_or_init(|| {
            self.password_hasher
                .hash(DECOY_PASSWORD)
                .unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Failed to build decoy password hash");
                    String::new()
                })
        })
    }

    /// Validate a bearer access token.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_service.verify_access_token(token)
    }
}
