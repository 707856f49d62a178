//! Balance calculation business logic.
//!
//! A balance is never stored: it is re-aggregated from the raw expense and
//! split rows on every query. That trades query latency (one pass over the
//! group's ledger) for consistency with the ledger itself, and it means
//! concurrent expense writes cannot race on a shared counter. Positive means
//! the group owes the user, negative means the user owes the group.

use std::collections::HashMap;

use crate::{
    entities::{Expense, ExpenseSplit, expense, expense_split},
    errors::Result,
};
use sea_orm::prelude::*;

/// Computes a user's net position within a group.
///
/// Total fronted as payer in the group, minus the total owed across all of
/// the user's splits in the group. A user or group with no recorded activity
/// yields 0.
pub async fn get_user_balance(
    db: &DatabaseConnection,
    user_id: Uuid,
    group_id: Uuid,
) -> Result<f64> {
    let total_paid: f64 = Expense::find()
        .filter(expense::Column::PayerId.eq(user_id))
        .filter(expense::Column::GroupId.eq(group_id))
        .all(db)
        .await?
        .iter()
        .map(|e| e.amount)
        .sum();

    // Splits reach their group only through the parent expense
    let group_expense_ids: Vec<Uuid> = Expense::find()
        .filter(expense::Column::GroupId.eq(group_id))
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    if group_expense_ids.is_empty() {
        return Ok(total_paid);
    }

    let total_owed: f64 = ExpenseSplit::find()
        .filter(expense_split::Column::UserId.eq(user_id))
        .filter(expense_split::Column::ExpenseId.is_in(group_expense_ids))
        .all(db)
        .await?
        .iter()
        .map(|s| s.amount)
        .sum();

    Ok(total_paid - total_owed)
}

/// Computes the net position of every user involved in a group's ledger.
///
/// One pass over the group's expenses and splits: each payer is credited the
/// full expense amount, each split debtor is debited their share. Whenever
/// splits partition each expense's full amount, the returned values sum to
/// zero (up to float rounding). Users with no activity do not appear.
pub async fn get_group_balances(
    db: &DatabaseConnection,
    group_id: Uuid,
) -> Result<HashMap<Uuid, f64>> {
    let expenses = Expense::find()
        .filter(expense::Column::GroupId.eq(group_id))
        .all(db)
        .await?;

    let mut balances: HashMap<Uuid, f64> = HashMap::new();
    if expenses.is_empty() {
        return Ok(balances);
    }

    let expense_ids: Vec<Uuid> = expenses.iter().map(|e| e.id).collect();
    let splits = ExpenseSplit::find()
        .filter(expense_split::Column::ExpenseId.is_in(expense_ids))
        .all(db)
        .await?;

    for e in &expenses {
        *balances.entry(e.payer_id).or_insert(0.0) += e.amount;
    }
    for s in &splits {
        *balances.entry(s.user_id).or_insert(0.0) -= s.amount;
    }

    Ok(balances)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::expense::{NewExpense, SplitInput, create_expense};
    use crate::test_utils::{new_even_expense, setup_group_with_members, setup_test_db};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[tokio::test]
    async fn test_balance_zero_without_activity() -> Result<()> {
        let db = setup_test_db().await?;
        let balance = get_user_balance(&db, Uuid::new_v4(), Uuid::new_v4()).await?;
        assert_eq!(balance, 0.0);

        let balances = get_group_balances(&db, Uuid::new_v4()).await?;
        assert!(balances.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_even_split_between_two_members() -> Result<()> {
        let (db, group, members) = setup_group_with_members(2).await?;
        let (ada, bob) = (&members[0], &members[1]);

        // A pays 100, split evenly
        create_expense(&db, new_even_expense(&group, ada, &[ada, bob], 100.0)).await?;

        assert_close(get_user_balance(&db, ada.id, group.id).await?, 50.0);
        assert_close(get_user_balance(&db, bob.id, group.id).await?, -50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_two_expense_scenario() -> Result<()> {
        let (db, group, members) = setup_group_with_members(2).await?;
        let (ada, bob) = (&members[0], &members[1]);

        // A pays 100 split {A:50, B:50}; B pays 40 split {A:20, B:20}
        create_expense(&db, new_even_expense(&group, ada, &[ada, bob], 100.0)).await?;
        create_expense(&db, new_even_expense(&group, bob, &[ada, bob], 40.0)).await?;

        // A: paid 100, owes 50+20 -> +30. B: paid 40, owes 50+20 -> -30.
        assert_close(get_user_balance(&db, ada.id, group.id).await?, 30.0);
        assert_close(get_user_balance(&db, bob.id, group.id).await?, -30.0);

        let balances = get_group_balances(&db, group.id).await?;
        assert_eq!(balances.len(), 2);
        assert_close(balances[&ada.id], 30.0);
        assert_close(balances[&bob.id], -30.0);
        assert_close(balances.values().sum::<f64>(), 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_balance_is_scoped_to_the_group() -> Result<()> {
        let (db, group, members) = setup_group_with_members(2).await?;
        let (ada, bob) = (&members[0], &members[1]);
        let other = crate::core::group::create_group_with_members(
            &db,
            "Other".to_string(),
            None,
            &[ada.id, bob.id],
        )
        .await?;

        create_expense(&db, new_even_expense(&group, ada, &[ada, bob], 80.0)).await?;
        create_expense(&db, new_even_expense(&other, bob, &[ada, bob], 20.0)).await?;

        assert_close(get_user_balance(&db, ada.id, group.id).await?, 40.0);
        assert_close(get_user_balance(&db, ada.id, other.id).await?, -10.0);
        assert_close(get_user_balance(&db, bob.id, group.id).await?, -40.0);
        assert_close(get_user_balance(&db, bob.id, other.id).await?, 10.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_uneven_splits() -> Result<()> {
        let (db, group, members) = setup_group_with_members(3).await?;
        let (ada, bob, cyn) = (&members[0], &members[1], &members[2]);

        create_expense(
            &db,
            NewExpense {
                description: "Dinner".to_string(),
                amount: 90.0,
                date: None,
                payer_id: ada.id,
                group_id: group.id,
                splits: vec![
                    SplitInput {
                        user_id: ada.id,
                        amount: 10.0,
                    },
                    SplitInput {
                        user_id: bob.id,
                        amount: 30.0,
                    },
                    SplitInput {
                        user_id: cyn.id,
                        amount: 50.0,
                    },
                ],
                enforce_split_total: false,
            },
        )
        .await?;

        assert_close(get_user_balance(&db, ada.id, group.id).await?, 80.0);
        assert_close(get_user_balance(&db, bob.id, group.id).await?, -30.0);
        assert_close(get_user_balance(&db, cyn.id, group.id).await?, -50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_balances_sum_to_zero_over_generated_ledger() -> Result<()> {
        let (db, group, members) = setup_group_with_members(4).await?;

        // A batch of varied full-partition expenses: rotating payers, prime-ish
        // amounts, always split across the whole membership.
        let amounts = [97.3, 12.0, 55.5, 40.01, 230.4, 7.77, 61.2, 18.9];
        for (i, amount) in amounts.iter().enumerate() {
            let payer = &members[i % members.len()];
            let debtors: Vec<_> = members.iter().collect();
            create_expense(&db, new_even_expense(&group, payer, &debtors, *amount)).await?;
        }

        let balances = get_group_balances(&db, group.id).await?;
        assert_eq!(balances.len(), members.len());
        assert_close(balances.values().sum::<f64>(), 0.0);

        // Per-user aggregate and the one-pass map agree
        for member in &members {
            assert_close(
                get_user_balance(&db, member.id, group.id).await?,
                balances[&member.id],
            );
        }

        Ok(())
    }
}
