//! Shared test utilities for Habitude.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{checkin, todo},
    entities,
    errors::Result,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with a predictable token.
pub async fn create_test_user(db: &DatabaseConnection) -> Result<entities::user::Model> {
    create_custom_user(db, "test_user", "test@example.com").await
}

/// Creates a test user with a custom username and email. The API token is
/// derived from the username so tests can authenticate without extra setup.
pub async fn create_custom_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<entities::user::Model> {
    let user = entities::user::ActiveModel {
        username: Set(username.to_owned()),
        email: Set(email.to_owned()),
        api_token: Set(format!("token-{username}")),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Creates a test check-in with two default goals.
///
/// # Defaults
/// * goals: `["first goal", "second goal"]`
/// * intentions: `"take it slow"`
pub async fn create_test_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    date: NaiveDate,
) -> Result<entities::checkin::Model> {
    create_custom_checkin(
        db,
        user_id,
        date,
        &["first goal", "second goal"],
        "take it slow",
    )
    .await
}

/// Creates a test check-in with custom goals and intentions.
pub async fn create_custom_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    date: NaiveDate,
    goals: &[&str],
    intentions: &str,
) -> Result<entities::checkin::Model> {
    let goals: Vec<String> = goals.iter().map(|&goal| goal.to_owned()).collect();
    checkin::create_checkin(db, user_id, &goals, intentions, date).await
}

/// Inserts a check-in row in the legacy four-column shape, bypassing the
/// normal create path. Used to test normalization of old data.
pub async fn create_legacy_checkin(
    db: &DatabaseConnection,
    user_id: i64,
    date: NaiveDate,
    goals: [Option<&str>; 4],
) -> Result<entities::checkin::Model> {
    let now = Utc::now();
    let legacy = entities::checkin::ActiveModel {
        user_id: Set(user_id),
        goals: Set(String::new()),
        goal1: Set(goals[0].map(ToOwned::to_owned)),
        goal2: Set(goals[1].map(ToOwned::to_owned)),
        goal3: Set(goals[2].map(ToOwned::to_owned)),
        goal4: Set(goals[3].map(ToOwned::to_owned)),
        intentions: Set("legacy intentions".to_owned()),
        date: Set(date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    legacy.insert(db).await.map_err(Into::into)
}

/// Creates a top-level test todo.
pub async fn create_test_todo(
    db: &DatabaseConnection,
    user_id: i64,
    text: &str,
) -> Result<entities::todo::Model> {
    todo::create_todo(db, user_id, text, None, None).await
}

/// Sets up a complete test environment with one user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db).await?;
    Ok((db, user))
}
