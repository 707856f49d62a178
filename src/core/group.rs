//! Group and membership business logic.
//!
//! Group creation persists the group row and one membership row per distinct
//! member id as a single transaction; the input list is deduplicated up front
//! instead of letting the pair index fail the whole call on a repeated id.
//! `add_member` is an idempotent enroll: a pair that already exists is a
//! no-op reported as `false`, not an error.

use std::collections::BTreeSet;

use crate::{
    entities::{Group, GroupMember, User, group, group_member},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::info;

/// Creates a group and enrolls the given members in one transaction.
///
/// Duplicate ids in `member_ids` are collapsed to one membership row each.
/// Every id must refer to an existing user; otherwise the whole operation
/// fails with `UserNotFound` and nothing is persisted.
pub async fn create_group_with_members(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
    member_ids: &[Uuid],
) -> Result<group::Model> {
    if name.trim().is_empty() {
        return Err(Error::EmptyField { field: "name" });
    }

    let distinct_ids: BTreeSet<Uuid> = member_ids.iter().copied().collect();

    let txn = db.begin().await?;

    for &user_id in &distinct_ids {
        ensure_user_exists(&txn, user_id).await?;
    }

    let record = group::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.trim().to_string()),
        description: Set(description),
        created_at: Set(chrono::Utc::now()),
    };
    let created = record.insert(&txn).await?;

    for &user_id in &distinct_ids {
        let membership = group_member::ActiveModel {
            id: Set(Uuid::new_v4()),
            group_id: Set(created.id),
            user_id: Set(user_id),
        };
        membership.insert(&txn).await?;
    }

    txn.commit().await?;

    info!(group_id = %created.id, members = distinct_ids.len(), "created group");
    Ok(created)
}

/// Enrolls a user into a group.
///
/// Returns `false` without touching the database when the membership already
/// exists, `true` after creating it. Group and user must both exist.
pub async fn add_member(db: &DatabaseConnection, group_id: Uuid, user_id: Uuid) -> Result<bool> {
    let txn = db.begin().await?;

    Group::find_by_id(group_id)
        .one(&txn)
        .await?
        .ok_or(Error::GroupNotFound { id: group_id })?;
    ensure_user_exists(&txn, user_id).await?;

    let existing = GroupMember::find()
        .filter(group_member::Column::GroupId.eq(group_id))
        .filter(group_member::Column::UserId.eq(user_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Ok(false);
    }

    let membership = group_member::ActiveModel {
        id: Set(Uuid::new_v4()),
        group_id: Set(group_id),
        user_id: Set(user_id),
    };
    membership.insert(&txn).await?;
    txn.commit().await?;

    info!(%group_id, %user_id, "added member");
    Ok(true)
}

/// Finds a group by its unique ID, returning None on a miss.
pub async fn get_group_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<group::Model>> {
    Group::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Produces the ids of every user currently enrolled in the group.
pub async fn list_members(db: &DatabaseConnection, group_id: Uuid) -> Result<Vec<Uuid>> {
    let memberships = GroupMember::find()
        .filter(group_member::Column::GroupId.eq(group_id))
        .all(db)
        .await?;
    Ok(memberships.into_iter().map(|m| m.user_id).collect())
}

async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<()> {
    User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })?;
    Ok(())
}
