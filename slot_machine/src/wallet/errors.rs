//! Wallet error types.

use thiserror::Error;

use crate::game::Credits;

/// Wallet errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Deposit amount must be positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(Credits),

    /// Not enough balance for a bet, or below the withdrawal floor
    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Credits, required: Credits },

    /// Account holder is not allowed to bet
    #[error("Player is not eligible to place bets")]
    Ineligible,
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

/// Errors decoding a persisted account record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unsupported record version: {0}")]
    UnsupportedVersion(String),

    #[error("Expected {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Result type for record decoding
pub type RecordResult<T> = Result<T, RecordError>;
