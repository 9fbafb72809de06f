//! Request authentication - resolves a bearer token to a user id.
//!
//! Account management itself (registration, credential storage, sessions) is
//! an external concern; this extractor only answers "which user is making
//! this request", failing with 401 when it cannot.

use crate::{
    api::AppState,
    entities::{User, user},
    errors::{Error, Result},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use sea_orm::prelude::*;

/// The authenticated user behind the current request.
///
/// Extracting this performs the account lookup, so handlers that take a
/// `CurrentUser` parameter can assume the id is valid.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The authenticated user's id
    pub id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(&parts.headers).ok_or(Error::Unauthenticated)?;

        let user = User::find()
            .filter(user::Column::ApiToken.eq(token))
            .one(&state.database)
            .await?
            .ok_or(Error::Unauthenticated)?;

        Ok(Self { id: user.id })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
