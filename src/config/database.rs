//! Database configuration module for `SplitLedger`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from the entity
//! models, so the database schema matches the Rust struct definitions without manual SQL.
//! The one piece of schema the entities cannot express on their own is the composite
//! uniqueness of a membership pair, which is created here as an explicit index.

use crate::entities::{Expense, ExpenseSplit, Group, GroupMember, User, group_member};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/splitledger.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// Creates tables for users, groups, group memberships, expenses, and expense splits,
/// then the composite unique index enforcing that a user is enrolled in a group at
/// most once.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let group_table = schema.create_table_from_entity(Group);
    let group_member_table = schema.create_table_from_entity(GroupMember);
    let expense_table = schema.create_table_from_entity(Expense);
    let expense_split_table = schema.create_table_from_entity(ExpenseSplit);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&group_table)).await?;
    db.execute(builder.build(&group_member_table)).await?;
    db.execute(builder.build(&expense_table)).await?;
    db.execute(builder.build(&expense_split_table)).await?;

    // Uniqueness of the (group, user) pair spans two columns, so it cannot be
    // expressed as a column attribute on the entity.
    let membership_pair_index = Index::create()
        .name("idx_group_members_group_user_unique")
        .table(GroupMember)
        .col(group_member::Column::GroupId)
        .col(group_member::Column::UserId)
        .unique()
        .to_owned();
    db.execute(builder.build(&membership_pair_index)).await?;

    Ok(())
}
