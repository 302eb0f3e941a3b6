use thiserror::Error;

use super::models::ItemId;

/// Error for ItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("Invalid item ID format: {0}")]
    InvalidFormat(String),

    #[error("Item ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for ItemName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemNameError {
    #[error("Item name is empty")]
    Empty,

    #[error("Item name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a finite number")]
    NotFinite,

    #[error("Price must be positive, got {0}")]
    NotPositive(f64),
}

/// Top-level error for item operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    #[error("Invalid item ID: {0}")]
    InvalidId(#[from] ItemIdError),

    #[error("Invalid item name: {0}")]
    InvalidName(#[from] ItemNameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Record store error: {0}")]
    Store(String),
}
