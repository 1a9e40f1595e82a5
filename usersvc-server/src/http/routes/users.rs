//! User endpoints
//!
//! Each handler is a single store call; outcomes map to status codes
//! through [`ApiError`].

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::http::error::ApiError;
use crate::http::extractors::{UserBody, UserId};
use crate::http::server::AppState;
use crate::models::User;

/// GET /api/users - list all users
#[instrument(skip(state))]
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// GET /api/users/{id} - get a single user
#[instrument(skip(state, id), fields(id = id.0))]
async fn get_user(
    State(state): State<Arc<AppState>>,
    id: UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.users.find(id.0).await?;
    Ok(Json(user))
}

/// POST /api/users - create a user
#[instrument(skip(state, body))]
async fn create_user(
    State(state): State<Arc<AppState>>,
    UserBody(body): UserBody,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.insert(body).await?;
    tracing::info!(id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/{id} - replace all fields of a user
#[instrument(skip(state, id, body), fields(id = id.0))]
async fn update_user(
    State(state): State<Arc<AppState>>,
    id: UserId,
    UserBody(body): UserBody,
) -> Result<StatusCode, ApiError> {
    state.users.update(id.0, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).put(update_user))
}
