use chrono::Duration;
use chrono::Utc;
use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenKind;

/// Validity windows for issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    access: Duration,
    refresh: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenLifetimesError {
    #[error("Access token lifetime must be positive")]
    NonPositiveAccess,

    #[error("Refresh token lifetime must exceed the access token lifetime")]
    RefreshNotLonger,
}

impl TokenLifetimes {
    pub fn new(access: Duration, refresh: Duration) -> Result<Self, TokenLifetimesError> {
        if access <= Duration::zero() {
            return Err(TokenLifetimesError::NonPositiveAccess);
        }
        if refresh <= access {
            return Err(TokenLifetimesError::RefreshNotLonger);
        }
        Ok(Self { access, refresh })
    }

    pub fn access(&self) -> Duration {
        self.access
    }

    pub fn refresh(&self) -> Duration {
        self.refresh
    }
}

impl Default for TokenLifetimes {
    /// One hour access tokens, seven day refresh tokens.
    fn default() -> Self {
        Self {
            access: Duration::hours(1),
            refresh: Duration::days(7),
        }
    }
}

/// Access and refresh token issued together at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issues and validates the signed, time-bound tokens of the session lifecycle.
#[derive(Debug)]
pub struct TokenService {
    jwt_handler: JwtHandler,
    lifetimes: TokenLifetimes,
}

impl TokenService {
    pub fn new(secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            lifetimes,
        }
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    pub fn issue_access_token(&self, username: &str) -> Result<String, JwtError> {
        self.issue(username, TokenKind::Access, self.lifetimes.access)
    }

    pub fn issue_refresh_token(&self, username: &str) -> Result<String, JwtError> {
        self.issue(username, TokenKind::Refresh, self.lifetimes.refresh)
    }

    pub fn issue_pair(&self, username: &str) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(username)?,
            refresh_token: self.issue_refresh_token(username)?,
        })
    }

    /// Decode a token of either kind, checking signature and expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Any check failed; the failing check is not reported
    pub fn verify_and_parse(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_kind(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_kind(token, TokenKind::Refresh)
    }

    fn verify_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = self.verify_and_parse(token)?;
        if claims.kind != expected {
            tracing::debug!(expected = %expected, actual = %claims.kind, "Token kind mismatch");
            return Err(JwtError::InvalidToken);
        }
        Ok(claims)
    }

    fn issue(&self, username: &str, kind: TokenKind, lifetime: Duration) -> Result<String, JwtError> {
        let claims = Claims::new(username, kind, Utc::now(), lifetime);
        self.jwt_handler.encode(&claims)
    }
}
