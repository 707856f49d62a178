//! Unified error types for the ledger core.
//!
//! Three families matter to callers: lookup misses (`UserNotFound`,
//! `GroupNotFound`), broken uniqueness invariants (`ConstraintViolation`), and
//! malformed input (`InvalidAmount`, `EmptySplits`, `NotAGroupMember`,
//! `SplitSumMismatch`, `EmptyField`). Everything else is infrastructure
//! pass-through. The request layer maps these onto its own status codes.

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for all ledger operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No user row exists with the given id
    #[error("user not found: {id}")]
    UserNotFound {
        /// The id that missed
        id: Uuid,
    },

    /// No group row exists with the given id
    #[error("group not found: {id}")]
    GroupNotFound {
        /// The id that missed
        id: Uuid,
    },

    /// A uniqueness invariant (email, membership pair) was violated
    #[error("constraint violation: {message}")]
    ConstraintViolation {
        /// Which invariant broke
        message: String,
    },

    /// Amount is non-positive or not finite
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// An expense was submitted without any splits
    #[error("an expense requires at least one split")]
    EmptySplits,

    /// A split debtor does not belong to the expense's group
    #[error("user {user_id} is not a member of group {group_id}")]
    NotAGroupMember {
        /// The debtor that is not enrolled
        user_id: Uuid,
        /// The group the expense belongs to
        group_id: Uuid,
    },

    /// Strict mode: split amounts do not add up to the expense amount
    #[error("splits sum to {split_total}, expense amount is {expense_amount}")]
    SplitSumMismatch {
        /// Sum over the submitted splits
        split_total: f64,
        /// The expense's total amount
        expense_amount: f64,
    },

    /// A required text field was empty
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the field
        field: &'static str,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database error from the underlying store
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
