//! User entity - Represents an account in the system.
//!
//! Authentication proper (credentials, sessions) is handled outside this
//! crate; the only thing the backend needs is a way to resolve a request
//! token to a user id, which the `api_token` column provides.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login/display name
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Opaque bearer token presented on every API request
    #[serde(skip_serializing)]
    pub api_token: String,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many check-ins
    #[sea_orm(has_many = "super::checkin::Entity")]
    Checkins,
    /// One user has many todos
    #[sea_orm(has_many = "super::todo::Entity")]
    Todos,
    /// One user has many journal entries
    #[sea_orm(has_many = "super::journal_entry::Entity")]
    JournalEntries,
}

impl Related<super::checkin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checkins.def()
    }
}

impl Related<super::todo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Todos.def()
    }
}

impl Related<super::journal_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
