//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing accounts). IO concerns belong to the crates that do IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A monetary amount was zero or negative where a positive value is required.
    #[error("invalid amount for {field}: {value} (must be greater than zero)")]
    InvalidAmount { field: String, value: String },

    /// A withdrawal asked for more than the account holds.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// No processor is registered for a transaction kind.
    #[error("no processor registered for transaction kind '{0}'")]
    UnknownTransactionKind(String),

    /// An entity failed a construction-time rule (negative quantity, grade out of range, ...).
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The referenced account does not exist.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// A uniqueness conflict (e.g. duplicate account number).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_amount(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn unknown_kind(kind: impl ToString) -> Self {
        Self::UnknownTransactionKind(kind.to_string())
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn account_not_found(number: impl ToString) -> Self {
        Self::AccountNotFound(number.to_string())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for the construction-time family (`InvalidAmount` and `Validation`).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. } | Self::Validation { .. })
    }
}
