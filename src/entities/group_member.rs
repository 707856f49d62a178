//! Group membership entity - The join relation between users and groups.
//!
//! Invariant: the pair (`group_id`, `user_id`) is unique. The schema carries a
//! composite unique index as the backstop (see `config::database`); the
//! membership operations also check the pair explicitly so callers get a
//! typed answer instead of a raw database error.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Group membership database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "group_members")]
pub struct Model {
    /// Unique identifier for the membership row
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The group the user belongs to
    pub group_id: Uuid,
    /// The enrolled user
    pub user_id: Uuid,
}

/// Defines relationships between GroupMember and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each membership row belongs to one group
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
    /// Each membership row belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
