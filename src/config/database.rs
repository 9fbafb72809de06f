//! Database configuration module for Habitude.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. It provides functions for establishing database connections and
//! creating all necessary tables based on the entity definitions. The module
//! uses `SeaORM`'s `Schema::create_table_from_entity` method to automatically
//! generate SQL statements from the entity models, ensuring that the database
//! schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Checkin, JournalEntry, Todo, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/habitude.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a default local file if unset.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// Tables are created for users, check-ins, todos, and journal entries.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // if_not_exists keeps this safe to run on every startup
    let mut user_table = schema.create_table_from_entity(User);
    user_table.if_not_exists();
    let mut checkin_table = schema.create_table_from_entity(Checkin);
    checkin_table.if_not_exists();
    let mut todo_table = schema.create_table_from_entity(Todo);
    todo_table.if_not_exists();
    let mut journal_entry_table = schema.create_table_from_entity(JournalEntry);
    journal_entry_table.if_not_exists();

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&checkin_table)).await?;
    db.execute(builder.build(&todo_table)).await?;
    db.execute(builder.build(&journal_entry_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CheckinModel, JournalEntryModel, TodoModel, UserModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _: Vec<CheckinModel> = Checkin::find().limit(1).all(&db).await?;
        let _: Vec<TodoModel> = Todo::find().limit(1).all(&db).await?;
        let _: Vec<JournalEntryModel> = JournalEntry::find().limit(1).all(&db).await?;

        Ok(())
    }
}
