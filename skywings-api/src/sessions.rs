use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use skywings_order::{Profile, ProfileForm};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{session_id}/profile", get(get_profile).put(save_profile))
}

pub(crate) fn session_not_found(session_id: &Uuid) -> AppError {
    AppError::NotFoundError(format!("Session not found: {}", session_id))
}

/// POST /v1/sessions
async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    tracing::info!("Session created: {}", session_id);
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// GET /v1/sessions/{session_id}/profile
async fn get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    state
        .sessions
        .with_session(&session_id, |s| s.profile.clone())
        .await
        .ok_or_else(|| session_not_found(&session_id))?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No profile yet".to_string()))
}

/// PUT /v1/sessions/{session_id}/profile
async fn save_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .sessions
        .with_session(&session_id, |s| s.save_profile(form).cloned())
        .await
        .ok_or_else(|| session_not_found(&session_id))??;

    Ok(Json(profile))
}
