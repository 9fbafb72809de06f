//! Journal business logic - one free-text entry per user per calendar day.
//!
//! Saving an entry for a day that already has one overwrites it; the
//! (user, date) pair is the upsert key.

use crate::{
    entities::{JournalEntry, journal_entry},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Saves the user's journal entry for `today`, overwriting any existing one.
pub async fn upsert_entry(
    db: &DatabaseConnection,
    user_id: i64,
    text: &str,
    today: NaiveDate,
) -> Result<journal_entry::Model> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::validation("journal entry cannot be empty"));
    }

    let now = Utc::now();
    let existing = JournalEntry::find()
        .filter(journal_entry::Column::UserId.eq(user_id))
        .filter(journal_entry::Column::Date.eq(today))
        .one(db)
        .await?;

    if let Some(entry) = existing {
        let mut active_model: journal_entry::ActiveModel = entry.into();
        active_model.entry = Set(text.to_owned());
        active_model.updated_at = Set(now);
        return active_model.update(db).await.map_err(Into::into);
    }

    let new_entry = journal_entry::ActiveModel {
        user_id: Set(user_id),
        date: Set(today),
        entry: Set(text.to_owned()),
        updated_at: Set(now),
        ..Default::default()
    };

    new_entry.insert(db).await.map_err(Into::into)
}

/// Returns the user's journal entry for `today`, if one exists.
pub async fn todays_entry(
    db: &DatabaseConnection,
    user_id: i64,
    today: NaiveDate,
) -> Result<Option<journal_entry::Model>> {
    JournalEntry::find()
        .filter(journal_entry::Column::UserId.eq(user_id))
        .filter(journal_entry::Column::Date.eq(today))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns every journal entry the user has written, newest date first.
pub async fn list_entries(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<journal_entry::Model>> {
    JournalEntry::find()
        .filter(journal_entry::Column::UserId.eq(user_id))
        .order_by_desc(journal_entry::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}
