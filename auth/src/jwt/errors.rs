use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures collapse into `InvalidToken` whatever the cause
/// (signature, structure, expiry, kind), so callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}
