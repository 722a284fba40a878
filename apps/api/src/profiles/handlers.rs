//! Axum route handlers for the Profile API. Persistence is delegated to
//! the external datastore; these handlers only translate HTTP to it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /api/v1/profile/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .datastore
        .fetch_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/:user_id
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(profile): Json<Profile>,
) -> Result<StatusCode, AppError> {
    state.datastore.upsert_profile(user_id, profile).await?;
    Ok(StatusCode::NO_CONTENT)
}
