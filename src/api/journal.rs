//! Journal endpoints.

use crate::{
    api::{AppState, auth::CurrentUser},
    core::journal,
    entities::JournalEntryModel,
    errors::{Error, Result},
};
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Deserialize;

/// Body for saving today's journal entry.
#[derive(Debug, Deserialize)]
pub struct JournalBody {
    /// The journal text
    pub entry: String,
}

/// `POST /api/journal` - saves today's entry, overwriting any existing one.
pub async fn upsert(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<JournalBody>,
) -> Result<(StatusCode, Json<JournalEntryModel>)> {
    let today = Utc::now().date_naive();
    let saved = journal::upsert_entry(&state.database, user.id, &body.entry, today).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// `GET /api/journal/today` - today's entry, or 404 if none.
pub async fn today(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<JournalEntryModel>> {
    let today = Utc::now().date_naive();
    journal::todays_entry(&state.database, user.id, today)
        .await?
        .map(Json)
        .ok_or(Error::NoJournalEntryToday)
}

/// `GET /api/journal` - every entry, newest date first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<JournalEntryModel>>> {
    let entries = journal::list_entries(&state.database, user.id).await?;
    Ok(Json(entries))
}
