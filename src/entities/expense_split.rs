//! Expense split entity - One member's share of an expense.
//!
//! Split rows exist only as part of an expense; they are inserted in the same
//! transaction as their parent row and are immutable afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense split database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expense_splits")]
pub struct Model {
    /// Unique identifier for the split row
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The expense this split belongs to
    pub expense_id: Uuid,
    /// The member who owes this share
    pub user_id: Uuid,
    /// Share amount owed by the member
    pub amount: f64,
}

/// Defines relationships between ExpenseSplit and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each split belongs to one expense
    #[sea_orm(
        belongs_to = "super::expense::Entity",
        from = "Column::ExpenseId",
        to = "super::expense::Column::Id"
    )]
    Expense,
    /// Each split names one debtor
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Debtor,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debtor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
