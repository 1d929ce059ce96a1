//! Custom error types for the wallet ledger
//!
//! Every ledger and codec failure is a distinct variant so callers can match
//! on the kind instead of parsing messages.

use thiserror::Error;

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Registration with a phone that already belongs to an account
    #[error("Phone already registered: {phone}")]
    PhoneAlreadyRegistered { phone: String },

    /// Deposit or payment with a zero or negative amount
    #[error("Amount must be greater than zero, got {amount}")]
    AmountMustBePositive { amount: i64 },

    /// Lookup by an unknown account id
    #[error("Account not found: {id}")]
    AccountNotFound { id: i64 },

    /// Payment larger than the current balance
    #[error("Not enough balance: need {needed}, have {available}")]
    NotEnoughBalance { needed: i64, available: i64 },

    /// Lookup by an unknown payment id
    #[error("Payment not found: {id}")]
    PaymentNotFound { id: String },

    /// Lookup by an unknown favorite id
    #[error("Favorite not found: {id}")]
    FavoriteNotFound { id: String },

    /// Reject called on a payment that has already failed
    #[error("Payment already rejected: {id}")]
    PaymentAlreadyRejected { id: String },

    /// Imported account id collides with an existing one
    #[error("Account id already in use: {id}")]
    DuplicateAccountId { id: i64 },

    /// Deposit or refund that would push a balance past the largest amount
    #[error("Balance overflow: {balance} + {amount} does not fit")]
    BalanceOverflow { balance: i64, amount: i64 },

    /// No account id is left to hand out
    #[error("Account ids exhausted")]
    AccountIdsExhausted,

    /// Text input that the persisted formats cannot hold
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// A persisted record could not be parsed or encoded
    #[error("Malformed record {record}: {reason}")]
    MalformedRecord { record: usize, reason: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Shared state errors (poisoned lock)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// Create a "malformed record" error
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }

    /// Create an "invalid field" error
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is one of the "not found" errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound { .. } | Self::PaymentNotFound { .. } | Self::FavoriteNotFound { .. }
        )
    }

    /// Check if this is a codec parse/encode error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WalletError {
    fn from(err: csv::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
