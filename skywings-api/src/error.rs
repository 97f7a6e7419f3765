use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skywings_core::CoreError;
use skywings_order::BookingError;

#[derive(Debug)]
pub enum AppError {
    ValidationError {
        message: String,
        missing_fields: Vec<&'static str>,
    },
    NotFoundError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError { message, missing_fields } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "missing_fields": missing_fields }),
            ),
            AppError::NotFoundError(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation { ref missing_fields } => AppError::ValidationError {
                missing_fields: missing_fields.clone(),
                message: err.to_string(),
            },
            BookingError::NotFound(_) | BookingError::FlightNotFound(_) => {
                AppError::NotFoundError(err.to_string())
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::ValidationError {
            message: err.to_string(),
            missing_fields: Vec::new(),
        }
    }
}
