use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any failure while loading, normalizing or converting a workbook.
    /// The pipeline does not distinguish parse errors from read errors;
    /// everything collapses to one display message.
    #[error("{0}")]
    Workbook(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Workbook(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Error reading the file: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
