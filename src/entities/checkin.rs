//! Check-in entity - A user's daily record of goals and intentions.
//!
//! Goals are stored canonically as a JSON-encoded string array in `goals`.
//! Rows written by older versions of the application instead carry up to
//! four discrete `goal1`..`goal4` columns; [`Model::normalized_goals`] folds
//! both shapes into one canonical sequence at every read boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Check-in database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checkins")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the check-in
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this check-in belongs to
    pub user_id: i64,
    /// JSON-encoded array of goal strings (canonical shape)
    pub goals: String,
    /// Legacy first goal, only set on rows predating the array shape
    pub goal1: Option<String>,
    /// Legacy second goal
    pub goal2: Option<String>,
    /// Legacy third goal
    pub goal3: Option<String>,
    /// Legacy fourth goal
    pub goal4: Option<String>,
    /// Free-text intentions for the day
    pub intentions: String,
    /// Calendar day the check-in is for; at most one row per user per day
    pub date: Date,
    /// When the check-in was first created
    pub created_at: DateTimeUtc,
    /// When the check-in was last edited
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Returns the goal list in its canonical shape: trimmed, blank entries
    /// dropped, insertion order preserved.
    ///
    /// Prefers the JSON array in `goals`; falls back to the legacy
    /// `goal1`..`goal4` columns when the array is absent or holds nothing
    /// usable. A stored check-in always yields at least one goal here, since
    /// both write paths validate that invariant.
    #[must_use]
    pub fn normalized_goals(&self) -> Vec<String> {
        let parsed: Vec<String> = serde_json::from_str(&self.goals).unwrap_or_default();
        let goals: Vec<String> = clean_goals(parsed.iter().map(String::as_str));
        if !goals.is_empty() {
            return goals;
        }

        clean_goals(
            [&self.goal1, &self.goal2, &self.goal3, &self.goal4]
                .into_iter()
                .filter_map(|goal| goal.as_deref()),
        )
    }
}

/// Trims each goal and drops the blank ones, keeping order.
fn clean_goals<'a>(goals: impl Iterator<Item = &'a str>) -> Vec<String> {
    goals
        .map(str::trim)
        .filter(|goal| !goal.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Defines relationships between Checkin and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each check-in belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One check-in may have been imported into many todos
    #[sea_orm(has_many = "super::todo::Entity")]
    Todos,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::todo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Todos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn checkin_with(goals: &str, legacy: [Option<&str>; 4]) -> Model {
        let now = Utc::now();
        Model {
            id: 1,
            user_id: 1,
            goals: goals.to_owned(),
            goal1: legacy[0].map(ToOwned::to_owned),
            goal2: legacy[1].map(ToOwned::to_owned),
            goal3: legacy[2].map(ToOwned::to_owned),
            goal4: legacy[3].map(ToOwned::to_owned),
            intentions: "stay present".to_owned(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_normalized_goals_array_shape() {
        let checkin = checkin_with(r#"["run", "  read  ", ""]"#, [None; 4]);
        assert_eq!(checkin.normalized_goals(), vec!["run", "read"]);
    }

    #[test]
    fn test_normalized_goals_legacy_shape() {
        let checkin = checkin_with("", [Some("stretch"), Some("  "), None, Some("call mum")]);
        assert_eq!(checkin.normalized_goals(), vec!["stretch", "call mum"]);
    }

    #[test]
    fn test_normalized_goals_prefers_array_over_legacy() {
        let checkin = checkin_with(r#"["new goal"]"#, [Some("old goal"), None, None, None]);
        assert_eq!(checkin.normalized_goals(), vec!["new goal"]);
    }

    #[test]
    fn test_normalized_goals_blank_array_falls_back_to_legacy() {
        let checkin = checkin_with(r#"["", "   "]"#, [Some("old goal"), None, None, None]);
        assert_eq!(checkin.normalized_goals(), vec!["old goal"]);
    }

    #[test]
    fn test_normalized_goals_empty_everywhere() {
        let checkin = checkin_with("", [None; 4]);
        assert!(checkin.normalized_goals().is_empty());
    }

    #[test]
    fn test_normalized_goals_preserves_order() {
        let checkin = checkin_with(r#"["b", "a", "c"]"#, [None; 4]);
        assert_eq!(checkin.normalized_goals(), vec!["b", "a", "c"]);
    }
}
