//! # Shop Error Types
//!
//! Typed error handling for the autoshop engine.
//! Every shop operation that can fail returns `Result<T, ShopError>`.

use crate::product::{Currency, Money};
use thiserror::Error;

/// Core error type for all shop operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// No product at the given 1-based catalog position
    #[error("Product not found at position {position}")]
    ProductNotFound { position: i64 },

    /// Quantity must be a positive number of units
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Customer balance does not cover the purchase
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Money, available: Money },

    /// Amounts in different currencies were combined
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Text that does not describe a non-negative amount
    #[error("Invalid amount: {input:?}")]
    InvalidAmount { input: String },

    /// Arithmetic left the representable range
    #[error("Amount overflow")]
    AmountOverflow,

    /// Configuration errors (negative balances, unreadable files)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ShopError {
    /// Returns true if the console can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShopError::Configuration(_))
    }
}

/// Result type alias for shop operations
pub type ShopResult<T> = Result<T, ShopError>;
