//! Authentication utilities library
//!
//! Provides the session lifecycle primitives used by the item service:
//! - Password hashing (Argon2id)
//! - Signed access and refresh tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenLifetimes, TokenService};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", TokenLifetimes::default());
//! let token = tokens.issue_access_token("alice").unwrap();
//! let claims = tokens.verify_and_parse(&token).unwrap();
//! assert_eq!(claims.username(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenLifetimes};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", TokenLifetimes::default());
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue tokens
//! let pair = auth.authenticate("alice", "password123", &hash).unwrap();
//!
//! // Refresh: mint a new access token
//! let (_, access_token) = auth.refresh(&pair.refresh_token).unwrap();
//! assert_eq!(auth.validate_access_token(&access_token).unwrap().username(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod tokens;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use tokens::TokenLifetimes;
pub use tokens::TokenLifetimesError;
pub use tokens::TokenPair;
pub use tokens::TokenService;
