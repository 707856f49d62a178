//! Shared test utilities for `SplitLedger`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{expense::NewExpense, expense::SplitInput, group, user},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with a placeholder credential.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, name.to_string(), email.to_string(), "hash".to_string()).await
}

/// Sets up a database, `member_count` users, and one group enrolling all of them.
/// Returns (db, group, members) for common ledger test scenarios.
pub async fn setup_group_with_members(
    member_count: usize,
) -> Result<(
    DatabaseConnection,
    entities::group::Model,
    Vec<entities::user::Model>,
)> {
    let db = setup_test_db().await?;

    let mut members = Vec::with_capacity(member_count);
    for i in 0..member_count {
        let member =
            create_test_user(&db, &format!("User {i}"), &format!("user{i}@example.com")).await?;
        members.push(member);
    }

    let member_ids: Vec<_> = members.iter().map(|m| m.id).collect();
    let created =
        group::create_group_with_members(&db, "Test Group".to_string(), None, &member_ids).await?;

    Ok((db, created, members))
}

/// Builds a `NewExpense` splitting `amount` evenly across `debtors`.
///
/// # Defaults
/// * `description`: `"Test expense"`
/// * `date`: None (recorded as now)
/// * `enforce_split_total`: false
#[must_use]
pub fn new_even_expense(
    group: &entities::group::Model,
    payer: &entities::user::Model,
    debtors: &[&entities::user::Model],
    amount: f64,
) -> NewExpense {
    #[allow(clippy::cast_precision_loss)]
    let share = amount / debtors.len() as f64;
    NewExpense {
        description: "Test expense".to_string(),
        amount,
        date: None,
        payer_id: payer.id,
        group_id: group.id,
        splits: debtors
            .iter()
            .map(|d| SplitInput {
                user_id: d.id,
                amount: share,
            })
            .collect(),
        enforce_split_total: false,
    }
}
