//! Todo entity - A single to-do item.
//!
//! `checkin_id` records which check-in the item was imported from, if any;
//! several todos may point at the same check-in. `parent_id` links a subtask
//! to its parent task - one level of nesting only, a subtask is never a
//! parent itself. `is_subtask` is always kept consistent with the presence
//! of `parent_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Todo database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the todo
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this todo belongs to
    pub user_id: i64,
    /// What needs doing
    pub text: String,
    /// Whether the item has been completed
    pub completed: bool,
    /// Check-in this todo was imported from, if it came from a goal import
    pub checkin_id: Option<i64>,
    /// Parent todo, set only on subtasks
    pub parent_id: Option<i64>,
    /// Derived flag, true exactly when `parent_id` is present
    pub is_subtask: bool,
    /// When the todo was created
    pub created_at: DateTimeUtc,
    /// When the todo was last edited
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Todo and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each todo belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// An imported todo references the check-in it came from
    #[sea_orm(
        belongs_to = "super::checkin::Entity",
        from = "Column::CheckinId",
        to = "super::checkin::Column::Id"
    )]
    Checkin,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::checkin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checkin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
