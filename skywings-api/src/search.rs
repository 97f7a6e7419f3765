use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use skywings_core::{FlightRecord, SearchQuery};
use uuid::Uuid;

use crate::error::AppError;
use crate::sessions::session_not_found;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    /// Position in this list is the `result_index` used when booking
    pub flights: Vec<FlightRecord>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/sessions/{session_id}/search", post(search_flights))
}

/// POST /v1/sessions/{session_id}/search
/// Generate a fresh catalog, filter and sort it, and remember the results
async fn search_flights(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    query.price_range.validate()?;

    let mut rng = StdRng::from_entropy();
    let catalog = state.generator.generate(&mut rng, state.catalog_size);
    let flights = skywings_offer::search(&catalog, &query);

    tracing::info!(
        "Search {:?} → {:?}: {} of {} flights",
        query.departure_city,
        query.arrival_city,
        flights.len(),
        catalog.len()
    );

    let stored = flights.clone();
    state
        .sessions
        .with_session(&session_id, |s| s.record_search(stored))
        .await
        .ok_or_else(|| session_not_found(&session_id))?;

    Ok(Json(SearchResponse {
        total: flights.len(),
        flights,
    }))
}
