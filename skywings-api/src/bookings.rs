use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use skywings_core::{PassengerInfo, PaymentMethod};
use skywings_order::Booking;
use uuid::Uuid;

use crate::error::AppError;
use crate::sessions::session_not_found;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    /// Index into the session's last search results
    pub result_index: usize,
    pub passenger: PassengerInfo,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/sessions/{session_id}/bookings",
            get(list_bookings).post(create_booking),
        )
        .route(
            "/v1/sessions/{session_id}/bookings/{booking_id}/cancel",
            post(cancel_booking),
        )
}

/// GET /v1/sessions/{session_id}/bookings
async fn list_bookings(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .sessions
        .with_session(&session_id, |s| s.bookings.clone())
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    Ok(Json(bookings))
}

/// POST /v1/sessions/{session_id}/bookings
async fn create_booking(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let clock = state.clock.clone();
    let booking = state
        .sessions
        .with_session(&session_id, |s| {
            let mut rng = StdRng::from_entropy();
            s.book(
                req.result_index,
                req.passenger,
                req.payment_method,
                &mut rng,
                clock.as_ref(),
            )
        })
        .await
        .ok_or_else(|| session_not_found(&session_id))??;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// POST /v1/sessions/{session_id}/bookings/{booking_id}/cancel
async fn cancel_booking(
    State(state): State<AppState>,
    Path((session_id, booking_id)): Path<(Uuid, String)>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .sessions
        .with_session(&session_id, |s| {
            s.cancel(&booking_id)?;
            Ok::<_, AppError>(s.booking(&booking_id).cloned())
        })
        .await
        .ok_or_else(|| session_not_found(&session_id))??
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", booking_id)))?;

    Ok(Json(booking))
}
