use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::AppError,
    services::excel::{self, presenter},
    AppState,
};

pub fn routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/sheets/convert", post(convert_sheets))
        .layer(DefaultBodyLimit::max(state.config.max_file_size))
        .layer(cors)
}

#[axum::debug_handler]
async fn convert_sheets(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let start = std::time::Instant::now();

    let data = read_upload(&mut multipart, state.config.max_file_size).await?;
    tracing::info!("Received upload, size: {}KB", data.len() / 1024);

    // The pipeline hands back an explicit result; the display layer pattern
    // matches on it instead of catching errors mid-flight.
    let response = match excel::convert_workbook(data) {
        Ok(result_set) => {
            tracing::info!("Conversion completed in {:?}", start.elapsed());
            Json(serde_json::Value::Object(result_set)).into_response()
        }
        Err(err) => {
            tracing::error!("Conversion failed: {}", err);
            let body = Json(serde_json::json!({
                "error": presenter::error_message(&err)
            }));
            (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
        }
    };

    Ok(response)
}

async fn read_upload(multipart: &mut Multipart, max_file_size: usize) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed upload: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;

            if data.len() > max_file_size {
                return Err(AppError::InvalidInput(format!(
                    "File exceeds maximum size of {} bytes",
                    max_file_size
                )));
            }

            return Ok(data);
        }
    }

    Err(AppError::InvalidInput("No file provided".to_string()))
}
