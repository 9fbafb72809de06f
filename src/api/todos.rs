//! Todo endpoints.

use crate::{
    api::{AppState, auth::CurrentUser},
    core::{Page, todo},
    entities::TodoModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

/// Body for creating a todo.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoBody {
    /// What needs doing
    pub text: String,
    /// Source check-in, when the item mirrors a goal
    #[serde(default)]
    pub checkin_id: Option<i64>,
    /// Parent todo, when creating a subtask directly
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Body for partially updating a todo.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoBody {
    /// New text, when renaming
    #[serde(default)]
    pub text: Option<String>,
    /// New completion state, when toggling
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body for importing a check-in's goals.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBody {
    /// The check-in to import from
    pub checkin_id: i64,
}

/// Query for the imported-goals check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedQuery {
    /// The check-in to look up
    pub checkin_id: i64,
}

/// Body for breaking a task down into subtasks.
#[derive(Debug, Deserialize)]
pub struct SubtasksBody {
    /// Subtask texts, in order; blanks are dropped
    pub subtasks: Vec<String>,
}

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<u64>,
    /// Items per page
    pub limit: Option<u64>,
}

/// `POST /api/todos` - creates a single todo.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<TodoModel>)> {
    let created = todo::create_todo(
        &state.database,
        user.id,
        &body.text,
        body.checkin_id,
        body.parent_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/todos` - paginated flat listing, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<TodoModel>>> {
    let page = todo::list_todos(
        &state.database,
        user.id,
        query.page.unwrap_or(1),
        query.limit.unwrap_or(todo::DEFAULT_PAGE_SIZE),
    )
    .await?;
    Ok(Json(page))
}

/// `GET /api/todos/grouped` - full listing in parent/subtask display order.
pub async fn grouped(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<TodoModel>>> {
    let todos = todo::list_todos_grouped(&state.database, user.id).await?;
    Ok(Json(todos))
}

/// `PUT /api/todos/:id` - renames and/or toggles a todo.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<TodoModel>> {
    let updated = todo::update_todo(
        &state.database,
        user.id,
        id,
        body.text.as_deref(),
        body.completed,
    )
    .await?;
    Ok(Json(updated))
}

/// `DELETE /api/todos/:id` - deletes a todo, cascading to subtasks when it
/// is a parent.
pub async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    todo::delete_todo(&state.database, user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/todos/imported` - whether a check-in's goals were imported.
pub async fn imported(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ImportedQuery>,
) -> Result<Json<serde_json::Value>> {
    let imported = todo::goals_imported(&state.database, user.id, query.checkin_id).await?;
    Ok(Json(json!({ "imported": imported })))
}

/// `POST /api/todos/import` - imports a check-in's goals as todos.
///
/// Responds 201 with the created items, or 200 when the goals had already
/// been imported and nothing was created.
pub async fn import(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<ImportBody>,
) -> Result<Response> {
    let response = match todo::import_goals(&state.database, user.id, body.checkin_id).await? {
        todo::ImportOutcome::Imported(todos) => (
            StatusCode::CREATED,
            Json(json!({
                "message": format!("imported {} goals as todo items", todos.len()),
                "todos": todos,
            })),
        )
            .into_response(),
        todo::ImportOutcome::AlreadyImported => (
            StatusCode::OK,
            Json(json!({
                "message": "goals from this check-in were already imported",
            })),
        )
            .into_response(),
    };
    Ok(response)
}

/// `POST /api/todos/:id/subtasks` - breaks a task down into subtasks.
pub async fn create_subtasks(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(body): Json<SubtasksBody>,
) -> Result<(StatusCode, Json<Vec<TodoModel>>)> {
    let created = todo::create_subtasks(&state.database, user.id, id, &body.subtasks).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
