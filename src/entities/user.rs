//! User entity - Represents a registered account.
//!
//! A user owns zero or more expenses as payer and appears in zero or more
//! groups through `group_member` rows. The email column carries a uniqueness
//! constraint; ids are v4 UUIDs generated by the creating operation rather
//! than by the database, so clients can mint them offline.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Stored credential (hashing is the caller's concern)
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user pays for many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
    /// One user is enrolled in many groups through membership rows
    #[sea_orm(has_many = "super::group_member::Entity")]
    Memberships,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
