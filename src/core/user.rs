//! User account business logic.
//!
//! Provides account creation with email uniqueness enforcement plus the
//! lookups the request layer needs: by id, by email, and the list of groups a
//! user is enrolled in. Creation checks the email inside the write transaction
//! so the caller gets a typed `ConstraintViolation` instead of a raw database
//! error; the unique column on `users.email` remains as the backstop.

use crate::{
    entities::{Group, GroupMember, User, group, group_member, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Creates a new user account with a fresh v4 UUID.
///
/// Validates that name and email are non-empty and that the email is not
/// already registered. The credential is stored as given; hashing it is the
/// request layer's concern.
pub async fn create_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
) -> Result<user::Model> {
    let name = name.trim().to_string();
    let email = email.trim().to_string();
    if name.is_empty() {
        return Err(Error::EmptyField { field: "name" });
    }
    if email.is_empty() {
        return Err(Error::EmptyField { field: "email" });
    }

    let txn = db.begin().await?;

    let existing = User::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(Error::ConstraintViolation {
            message: format!("email already registered: {email}"),
        });
    }

    let account = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
    };
    let result = account.insert(&txn).await?;
    txn.commit().await?;

    info!(user_id = %result.id, "created user");
    Ok(result)
}

/// Finds a user by its unique ID, returning None on a miss.
pub async fn get_user_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<user::Model>> {
    User::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Finds a user by email, returning None on a miss.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every group the user is enrolled in, ordered alphabetically by name.
///
/// Returns `UserNotFound` if the user id itself is unknown, so the request
/// layer can distinguish "no groups yet" from "no such user".
pub async fn get_user_groups(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<group::Model>> {
    get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })?;

    let memberships = GroupMember::find()
        .filter(group_member::Column::UserId.eq(user_id))
        .all(db)
        .await?;
    let group_ids: Vec<Uuid> = memberships.into_iter().map(|m| m.group_id).collect();
    if group_ids.is_empty() {
        return Ok(Vec::new());
    }

    Group::find()
        .filter(group::Column::Id.is_in(group_ids))
        .order_by_asc(group::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
