use thiserror::Error;

/// Failure kinds reported by record store adapters.
///
/// `NotFound` is a distinguished outcome of lookups, not a backend fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Record conflicts with an existing one: {0}")]
    Conflict(String),

    #[error("Record store failure: {0}")]
    Backend(String),
}
