use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use skywings_api::{app, app_config::Config, AppState};
use skywings_core::FixedClock;
use std::sync::Arc;
use tower::ServiceExt;

const CATALOG_SIZE: usize = 40;

fn test_config() -> Config {
    let mut config = Config::default();
    config.catalog.size = CATALOG_SIZE;
    config
}

fn test_app() -> Router {
    app(AppState::new(&test_config()))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn new_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

async fn search(app: &Router, session: &str, query: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/v1/sessions/{session}/search"), Some(query)).await
}

async fn book(app: &Router, session: &str, request: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/v1/sessions/{session}/bookings"), Some(request)).await
}

async fn list_bookings(app: &Router, session: &str) -> (StatusCode, Value) {
    send(app, "GET", &format!("/v1/sessions/{session}/bookings"), None).await
}

fn parse_time(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

fn open_query() -> Value {
    json!({ "price_range": { "min": 0, "max": 2000 }, "sort": "price_asc" })
}

fn passenger() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "passport": "P998877",
        "date_of_birth": "1990-12-10",
        "seat_preference": "Window",
        "meal_preference": "Vegan"
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_without_filters_returns_sorted_catalog() {
    let app = test_app();
    let session = new_session(&app).await;

    let (status, body) = search(&app, &session, open_query()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], CATALOG_SIZE);

    let prices: Vec<u64> = body["flights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["price_cents"].as_u64().unwrap())
        .collect();
    assert_eq!(prices.len(), CATALOG_SIZE);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_empty_airline_selection_returns_nothing() {
    let app = test_app();
    let session = new_session(&app).await;

    let mut query = open_query();
    query["airlines"] = json!([]);
    let (status, body) = search(&app, &session, query).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_inverted_price_range_rejected() {
    let app = test_app();
    let session = new_session(&app).await;

    let query = json!({ "price_range": { "min": 900, "max": 100 } });
    let (status, _) = search(&app, &session, query).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let app = test_app();
    let session = new_session(&app).await;

    let (_, results) = search(&app, &session, open_query()).await;
    let chosen = results["flights"][0].clone();

    let request = json!({
        "result_index": 0,
        "passenger": passenger(),
        "payment_method": "PayPal"
    });
    let (status, booking) = book(&app, &session, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["status"], "Confirmed");
    assert_eq!(booking["flight"], chosen);
    assert_eq!(booking["payment_method"], "PayPal");
    let booking_id = booking["booking_id"].as_str().unwrap().to_string();
    assert!(booking_id.starts_with("BK"));

    // A new search must not change the stored snapshot
    search(&app, &session, open_query()).await;
    let (status, list) = list_bookings(&app, &session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["flight"], chosen);

    let profile_uri = format!("/v1/sessions/{session}/profile");
    let (status, profile) = send(&app, "GET", &profile_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["email"], "ada@example.com");

    let cancel_uri = format!("/v1/sessions/{session}/bookings/{booking_id}/cancel");
    let (status, cancelled) = send(&app, "POST", &cancel_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "Cancelled");

    let (status, cancelled) = send(&app, "POST", &cancel_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "Cancelled");

    let unknown_uri = format!("/v1/sessions/{session}/bookings/BK000000/cancel");
    let (status, _) = send(&app, "POST", &unknown_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = list_bookings(&app, &session).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_booking_with_missing_fields_rejected() {
    let app = test_app();
    let session = new_session(&app).await;
    search(&app, &session, open_query()).await;

    let mut p = passenger();
    p["email"] = json!("   ");
    p["phone"] = json!("");
    let request = json!({ "result_index": 0, "passenger": p });
    let (status, body) = book(&app, &session, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missing_fields"], json!(["email", "phone"]));

    let (_, list) = list_bookings(&app, &session).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_unknown_result_index() {
    let app = test_app();
    let session = new_session(&app).await;

    let request = json!({ "result_index": 3, "passenger": passenger() });
    let (status, _) = book(&app, &session, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session() {
    let app = test_app();
    let uri = "/v1/sessions/00000000-0000-0000-0000-000000000000/bookings";
    let (status, body) = send(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().starts_with("Session not found"));
}

#[tokio::test]
async fn test_profile_form() {
    let app = test_app();
    let session = new_session(&app).await;
    let uri = format!("/v1/sessions/{session}/profile");

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let form = json!({ "first_name": "Alan", "last_name": "Turing", "email": "" });
    let (status, body) = send(&app, "PUT", &uri, Some(form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missing_fields"], json!(["email"]));

    let form = json!({ "first_name": "Alan", "last_name": "Turing", "email": "alan@example.com" });
    let (status, body) = send(&app, "PUT", &uri, Some(form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_name"], "Turing");
    assert_eq!(body["phone"], Value::Null);
}

#[tokio::test]
async fn test_analytics() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/v1/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total_flights"], CATALOG_SIZE);
    assert!(body["summary"]["most_popular_destination"].is_string());

    let histogram_total: u64 = body["price_histogram"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();
    assert_eq!(histogram_total, CATALOG_SIZE as u64);
    assert!(body["top_destinations"].as_array().unwrap().len() <= 10);
    assert_eq!(body["duration_vs_price"].as_array().unwrap().len(), CATALOG_SIZE);
}

#[tokio::test]
async fn test_bookings_stay_in_their_session() {
    let app = test_app();
    let first = new_session(&app).await;
    let second = new_session(&app).await;

    search(&app, &first, open_query()).await;
    let request = json!({ "result_index": 0, "passenger": passenger() });
    let (status, _) = book(&app, &first, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = list_bookings(&app, &first).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, list) = list_bookings(&app, &second).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());

    let profile_uri = format!("/v1/sessions/{second}/profile");
    let (status, _) = send(&app, "GET", &profile_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The second session never searched, so it has no result to book
    let request = json!({ "result_index": 0, "passenger": passenger() });
    let (status, _) = book(&app, &second, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pinned_clock_drives_catalog_and_booking_date() {
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    let app = app(AppState::with_clock(&test_config(), Arc::new(FixedClock(now))));
    let session = new_session(&app).await;

    let (_, results) = search(&app, &session, open_query()).await;
    let flights = results["flights"].as_array().unwrap();
    assert_eq!(flights.len(), CATALOG_SIZE);
    for flight in flights {
        let departure = parse_time(&flight["departure_time"]);
        assert!(departure >= now + Duration::days(1));
        assert!(departure <= now + Duration::days(30) + Duration::hours(23));
    }

    let request = json!({ "result_index": 0, "passenger": passenger() });
    let (status, booking) = book(&app, &session, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse_time(&booking["booking_date"]), now);
}
