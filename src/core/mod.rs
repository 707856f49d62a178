//! Core business logic - framework-agnostic ledger operations.
//!
//! Each module owns one concern: account creation and lookup ([`user`]),
//! groups and membership ([`group`]), atomic expense-plus-splits recording
//! ([`expense`]), and net-position aggregation ([`balance`]). All functions
//! are async, take a `DatabaseConnection`, and return the crate `Result`.

/// Net-position aggregation over ledger rows
pub mod balance;
/// Atomic expense recording and expense queries
pub mod expense;
/// Group creation and membership management
pub mod group;
/// User account operations
pub mod user;
