//! Check-in endpoints.

use crate::{
    api::{AppState, auth::CurrentUser},
    core::{Page, checkin, streak},
    entities::CheckinModel,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Body for creating or editing a check-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinBody {
    /// Goal texts, in display order
    pub goals: Vec<String>,
    /// Free-text intentions for the day
    pub intentions: String,
    /// Calendar day the check-in is for; defaults to today (UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<u64>,
    /// Items per page
    pub limit: Option<u64>,
}

/// `POST /api/checkins` - records today's check-in, editing it in place when
/// one already exists for the day.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CheckinBody>,
) -> Result<(StatusCode, Json<CheckinModel>)> {
    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());
    let created =
        checkin::create_checkin(&state.database, user.id, &body.goals, &body.intentions, date)
            .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/checkins` - paginated check-in history, newest date first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<CheckinModel>>> {
    let page = checkin::list_checkins(
        &state.database,
        user.id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(checkin::DEFAULT_PAGE_SIZE),
    )
    .await?;
    Ok(Json(page))
}

/// `GET /api/checkins/today` - today's check-in, or 404 if none.
pub async fn today(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CheckinModel>> {
    let today = Utc::now().date_naive();
    checkin::todays_checkin(&state.database, user.id, today)
        .await?
        .map(Json)
        .ok_or(Error::NoCheckinToday)
}

/// `GET /api/checkins/stats` - total check-ins and current streak.
pub async fn stats(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<streak::CheckinStats>> {
    let today = Utc::now().date_naive();
    let stats = streak::checkin_stats(&state.database, user.id, today).await?;
    Ok(Json(stats))
}

/// `PUT /api/checkins/:id` - edits an existing check-in.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<CheckinBody>,
) -> Result<Json<CheckinModel>> {
    let updated =
        checkin::update_checkin(&state.database, user.id, id, &body.goals, &body.intentions)
            .await?;
    Ok(Json(updated))
}
