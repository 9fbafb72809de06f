//! Check-in business logic - creating, editing, and querying daily check-ins.
//!
//! A user records at most one check-in per calendar day: creating a check-in
//! for a day that already has one edits the existing row instead of inserting
//! a duplicate. All write paths validate that at least one non-blank goal
//! survives normalization.

use crate::{
    core::{Page, PageMeta},
    entities::{Checkin, checkin},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Default page size for the check-in history listing.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Trims the submitted goals and drops blank ones, preserving order.
fn normalize_goals(goals: &[String]) -> Vec<String> {
    goals
        .iter()
        .map(|goal| goal.trim())
        .filter(|goal| !goal.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Validates a goal list and intentions text, returning the normalized goals.
fn validate(goals: &[String], intentions: &str) -> Result<Vec<String>> {
    let goals = normalize_goals(goals);
    if goals.is_empty() {
        return Err(Error::validation("at least one goal is required"));
    }
    if intentions.trim().is_empty() {
        return Err(Error::validation("intentions cannot be empty"));
    }
    Ok(goals)
}

/// Finds a check-in by id, scoped to its owner.
///
/// Returns `None` both when the id does not exist and when it belongs to a
/// different user, so callers cannot leak other users' data.
pub async fn get_checkin_by_id_and_user(
    db: &DatabaseConnection,
    checkin_id: i64,
    user_id: i64,
) -> Result<Option<checkin::Model>> {
    Checkin::find_by_id(checkin_id)
        .filter(checkin::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Records the user's check-in for `date`.
///
/// Goals are trimmed and blank entries dropped before validation; the
/// operation fails with a validation error when no goal survives or the
/// intentions text is blank. If the user already has a check-in on `date`
/// the existing row is updated in place - one check-in per user per
/// calendar day is a data invariant, not just a UI rule.
pub async fn create_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    goals: &[String],
    intentions: &str,
    date: NaiveDate,
) -> Result<checkin::Model> {
    let goals = validate(goals, intentions)?;
    let goals_json = serde_json::to_string(&goals)?;
    let now = Utc::now();

    let existing = Checkin::find()
        .filter(checkin::Column::UserId.eq(user_id))
        .filter(checkin::Column::Date.eq(date))
        .one(db)
        .await?;

    if let Some(checkin) = existing {
        let mut active_model: checkin::ActiveModel = checkin.into();
        active_model.goals = Set(goals_json);
        active_model.goal1 = Set(None);
        active_model.goal2 = Set(None);
        active_model.goal3 = Set(None);
        active_model.goal4 = Set(None);
        active_model.intentions = Set(intentions.trim().to_owned());
        active_model.updated_at = Set(now);
        return active_model.update(db).await.map_err(Into::into);
    }

    let new_checkin = checkin::ActiveModel {
        user_id: Set(user_id),
        goals: Set(goals_json),
        intentions: Set(intentions.trim().to_owned()),
        date: Set(date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_checkin.insert(db).await.map_err(Into::into)
}

/// Edits an existing check-in owned by the user.
///
/// The stored goals are rewritten in the canonical array shape and any
/// legacy goal columns are cleared, so an edited row never needs the
/// legacy fallback again.
pub async fn update_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    checkin_id: i64,
    goals: &[String],
    intentions: &str,
) -> Result<checkin::Model> {
    let goals = validate(goals, intentions)?;

    let checkin = get_checkin_by_id_and_user(db, checkin_id, user_id)
        .await?
        .ok_or(Error::CheckinNotFound { id: checkin_id })?;

    let mut active_model: checkin::ActiveModel = checkin.into();
    active_model.goals = Set(serde_json::to_string(&goals)?);
    active_model.goal1 = Set(None);
    active_model.goal2 = Set(None);
    active_model.goal3 = Set(None);
    active_model.goal4 = Set(None);
    active_model.intentions = Set(intentions.trim().to_owned());
    active_model.updated_at = Set(Utc::now());

    active_model.update(db).await.map_err(Into::into)
}

/// Returns the user's check-in for `today`, if they have recorded one.
pub async fn todays_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    today: NaiveDate,
) -> Result<Option<checkin::Model>> {
    Checkin::find()
        .filter(checkin::Column::UserId.eq(user_id))
        .filter(checkin::Column::Date.eq(today))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns one page of the user's check-in history, newest date first.
///
/// `page` is 1-based; out-of-range pages yield an empty item list with the
/// metadata still filled in.
pub async fn list_checkins(
    db: &DatabaseConnection,
    user_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<checkin::Model>> {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let paginator = Checkin::find()
        .filter(checkin::Column::UserId.eq(user_id))
        .order_by_desc(checkin::Column::Date)
        .paginate(db, per_page);

    let total = paginator.num_items().await?;
    let total_pages = paginator.num_pages().await?;
    let items = paginator.fetch_page(page - 1).await?;

    Ok(Page {
        items,
        pagination: PageMeta {
            total,
            page,
            limit: per_page,
            total_pages,
        },
    })
}
