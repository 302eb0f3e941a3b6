use thiserror::Error;

/// Outcomes of the register, login and refresh flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("Username already exists: {0}")]
    Conflict(String),

    /// Shared by unknown usernames and wrong passwords.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
