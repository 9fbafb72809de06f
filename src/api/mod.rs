//! HTTP layer - routing, shared request state, and error mapping.
//!
//! Handlers in this layer are deliberately thin: they parse the request,
//! resolve the authenticated user, call into [`crate::core`], and let the
//! [`Error`](crate::errors::Error)-to-status mapping below shape the
//! response. No business rules live here.

/// Bearer-token authentication extractor
pub mod auth;
/// Check-in endpoints (create, history, today, stats)
pub mod checkins;
/// Journal endpoints (upsert, today, list)
pub mod journal;
/// Todo endpoints (CRUD, goal import, subtasks, grouped listing)
pub mod todos;

use crate::errors::Error;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use serde_json::json;

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all record-store operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the application router with every API route attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/checkins", post(checkins::create).get(checkins::list))
        .route("/api/checkins/today", get(checkins::today))
        .route("/api/checkins/stats", get(checkins::stats))
        .route("/api/checkins/:id", put(checkins::update))
        .route("/api/todos", post(todos::create).get(todos::list))
        .route("/api/todos/grouped", get(todos::grouped))
        .route("/api/todos/imported", get(todos::imported))
        .route("/api/todos/import", post(todos::import))
        .route("/api/todos/:id", put(todos::update).delete(todos::remove))
        .route("/api/todos/:id/subtasks", post(todos::create_subtasks))
        .route("/api/journal", post(journal::upsert).get(journal::list))
        .route("/api/journal/today", get(journal::today))
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::CheckinNotFound { .. }
            | Self::TodoNotFound { .. }
            | Self::NoCheckinToday
            | Self::NoJournalEntryToday => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Config { .. } | Self::Database(_) | Self::Serialization(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal failures are logged in full but never echoed to the caller.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
