//! Custom error types for BudgeIt
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Name-lookup misses are reported by the model as `false`, not as errors;
//! `NotFound` exists for the command-line boundary which turns them into a
//! failing exit.

use thiserror::Error;

use crate::models::Money;

/// The main error type for BudgeIt operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A source or debt with this name already exists on the account
    #[error("{entity_type} already exists: {name}")]
    DuplicateName {
        entity_type: &'static str,
        name: String,
    },

    /// A source or debt with this name does not exist on the account
    #[error("{entity_type} not found: {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// A rate or goal percentage outside [0, 1]
    #[error("{field} must be between 0% and 100%, got {}", .value.format_percent())]
    OutOfRange { field: &'static str, value: Money },

    /// A withdrawal or payment larger than its source of funds
    #[error("Amount {requested} exceeds available balance {available}")]
    ExceedsBalance { requested: Money, available: Money },

    /// An amount grew past what a decimal can represent, or the period
    /// counter ran out
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Unparseable numeric input
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The account file could not be decoded into a valid account
    #[error("Malformed account file: {0}")]
    MalformedAccountFile(String),

    /// Validation errors for names and amounts
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "duplicate" error for sources
    pub fn duplicate_source(name: impl Into<String>) -> Self {
        Self::DuplicateName {
            entity_type: "Source",
            name: name.into(),
        }
    }

    /// Create a "duplicate" error for debts
    pub fn duplicate_debt(name: impl Into<String>) -> Self {
        Self::DuplicateName {
            entity_type: "Debt",
            name: name.into(),
        }
    }

    /// Create a "not found" error for sources
    pub fn source_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Source",
            name: name.into(),
        }
    }

    /// Create a "not found" error for debts
    pub fn debt_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Debt",
            name: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgeIt operations
pub type LedgerResult<T> = Result<T, LedgerError>;
