//! Expense ledger business logic - atomic expense-plus-splits recording.
//!
//! This is the heart of the ledger. `create_expense` writes the expense row
//! and every split row inside one database transaction, committed once: a
//! reader can never observe an expense with zero splits or with only part of
//! its splits. Validation runs inside the same transaction, before any row is
//! written - a non-positive amount, an empty split list, or a split debtor
//! who is not enrolled in the group fails the whole call and persists
//! nothing. Retrieval is by group or by payer; splits are queried per
//! expense.

use crate::{
    entities::{Expense, ExpenseSplit, Group, GroupMember, User, expense, expense_split, group_member},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Absolute tolerance for the strict-mode split total check. Amounts are
/// stored as `f64`, so an exact equality would reject honest inputs like
/// three splits of 10.0/3.
pub const SPLIT_TOTAL_TOLERANCE: f64 = 1e-6;

/// One member's share of a new expense, as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInput {
    /// The member who owes this share
    pub user_id: Uuid,
    /// Share amount
    pub amount: f64,
}

/// Everything needed to record a new expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Human-readable description
    pub description: String,
    /// Total amount paid, strictly positive
    pub amount: f64,
    /// When the expense happened; defaults to now
    pub date: Option<DateTimeUtc>,
    /// The user who fronted the money
    pub payer_id: Uuid,
    /// The group the expense belongs to
    pub group_id: Uuid,
    /// One entry per member sharing the expense; must be non-empty
    pub splits: Vec<SplitInput>,
    /// When true, reject splits whose amounts do not sum to `amount`
    /// (within [`SPLIT_TOTAL_TOLERANCE`]). Off by default: the sum is
    /// otherwise left to caller discipline.
    pub enforce_split_total: bool,
}

/// Records an expense together with all its splits as one transaction.
///
/// Preconditions: a finite, strictly positive amount; a non-empty split list
/// with finite share amounts. The payer and the group must exist, and every
/// split debtor must be enrolled in the group. Any failure rolls the whole
/// operation back, so no partial expense is ever visible.
pub async fn create_expense(
    db: &DatabaseConnection,
    new_expense: NewExpense,
) -> Result<expense::Model> {
    if !(new_expense.amount.is_finite() && new_expense.amount > 0.0) {
        return Err(Error::InvalidAmount {
            amount: new_expense.amount,
        });
    }
    if new_expense.splits.is_empty() {
        return Err(Error::EmptySplits);
    }
    for split in &new_expense.splits {
        if !split.amount.is_finite() {
            return Err(Error::InvalidAmount {
                amount: split.amount,
            });
        }
    }
    if new_expense.enforce_split_total {
        let split_total: f64 = new_expense.splits.iter().map(|s| s.amount).sum();
        if (split_total - new_expense.amount).abs() > SPLIT_TOTAL_TOLERANCE {
            return Err(Error::SplitSumMismatch {
                split_total,
                expense_amount: new_expense.amount,
            });
        }
    }

    let txn = db.begin().await?;

    Group::find_by_id(new_expense.group_id)
        .one(&txn)
        .await?
        .ok_or(Error::GroupNotFound {
            id: new_expense.group_id,
        })?;
    User::find_by_id(new_expense.payer_id)
        .one(&txn)
        .await?
        .ok_or(Error::UserNotFound {
            id: new_expense.payer_id,
        })?;

    // Membership is checked once against the full set rather than per split.
    let members: Vec<Uuid> = GroupMember::find()
        .filter(group_member::Column::GroupId.eq(new_expense.group_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    for split in &new_expense.splits {
        if !members.contains(&split.user_id) {
            return Err(Error::NotAGroupMember {
                user_id: split.user_id,
                group_id: new_expense.group_id,
            });
        }
    }

    let record = expense::ActiveModel {
        id: Set(Uuid::new_v4()),
        description: Set(new_expense.description),
        amount: Set(new_expense.amount),
        date: Set(new_expense.date.unwrap_or_else(chrono::Utc::now)),
        payer_id: Set(new_expense.payer_id),
        group_id: Set(new_expense.group_id),
    };
    let created = record.insert(&txn).await?;

    for split in &new_expense.splits {
        let row = expense_split::ActiveModel {
            id: Set(Uuid::new_v4()),
            expense_id: Set(created.id),
            user_id: Set(split.user_id),
            amount: Set(split.amount),
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;

    info!(
        expense_id = %created.id,
        group_id = %created.group_id,
        amount = created.amount,
        splits = new_expense.splits.len(),
        "recorded expense"
    );
    Ok(created)
}

/// Retrieves all expenses recorded for a group, oldest first.
pub async fn get_group_expenses(
    db: &DatabaseConnection,
    group_id: Uuid,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::GroupId.eq(group_id))
        .order_by_asc(expense::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all expenses fronted by a user across every group, oldest first.
pub async fn get_user_expenses(
    db: &DatabaseConnection,
    payer_id: Uuid,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::PayerId.eq(payer_id))
        .order_by_asc(expense::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the split rows of one expense.
pub async fn get_expense_splits(
    db: &DatabaseConnection,
    expense_id: Uuid,
) -> Result<Vec<expense_split::Model>> {
    ExpenseSplit::find()
        .filter(expense_split::Column::ExpenseId.eq(expense_id))
        .all(db)
        .await
        .map_err(Into::into)
}
