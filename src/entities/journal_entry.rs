//! Journal entry entity - One free-text entry per user per calendar day.
//!
//! Writes go through an upsert keyed on (`user_id`, `date`), so the
//! one-entry-per-day invariant holds even though the store itself does not
//! enforce it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Journal entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the journal entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this entry belongs to
    pub user_id: i64,
    /// Calendar day the entry is for
    pub date: Date,
    /// The journal text itself
    pub entry: String,
    /// When the entry was last written
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between JournalEntry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each journal entry belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
