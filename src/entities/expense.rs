//! Expense entity - A payment fronted by one user on behalf of a group.
//!
//! Each expense references its payer and its group and exclusively owns its
//! split rows: splits are written in the same transaction as the expense and
//! never touched independently, so a visible expense always carries its full
//! set of splits.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human-readable description of the expense
    pub description: String,
    /// Total amount paid, strictly positive
    pub amount: f64,
    /// When the expense happened
    pub date: DateTimeUtc,
    /// The user who fronted the money
    pub payer_id: Uuid,
    /// The group this expense belongs to
    pub group_id: Uuid,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense has one payer
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PayerId",
        to = "super::user::Column::Id"
    )]
    Payer,
    /// Each expense belongs to one group
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
    /// One expense has many splits
    #[sea_orm(has_many = "super::expense_split::Entity")]
    Splits,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payer.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::expense_split::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Splits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
