use axum::{extract::State, routing::get, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use skywings_offer::{
    analytics::{DEFAULT_HISTOGRAM_BINS, DEFAULT_TOP_DESTINATIONS},
    duration_price_points, price_histogram, top_destinations, CatalogSummary, DestinationCount,
    DurationPricePoint, PriceBucket,
};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub summary: CatalogSummary,
    pub price_histogram: Vec<PriceBucket>,
    pub top_destinations: Vec<DestinationCount>,
    pub duration_vs_price: Vec<DurationPricePoint>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/analytics", get(get_analytics))
}

/// GET /v1/analytics
/// Aggregates over a freshly generated catalog
async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let mut rng = StdRng::from_entropy();
    let catalog = state.generator.generate(&mut rng, state.catalog_size);

    let summary = CatalogSummary::from_catalog(&catalog);
    tracing::debug!(
        "Analytics over {} flights, average price {:?}",
        summary.total_flights,
        summary.average_price
    );

    Json(AnalyticsResponse {
        summary,
        price_histogram: price_histogram(&catalog, DEFAULT_HISTOGRAM_BINS),
        top_destinations: top_destinations(&catalog, DEFAULT_TOP_DESTINATIONS),
        duration_vs_price: duration_price_points(&catalog),
    })
}
