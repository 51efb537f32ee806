use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::screenshotter;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScreenshotParams {
    #[serde(default)]
    addresses: Vec<String>,
}

/// POST /api/screenshot_addresses
pub async fn screenshot_addresses(
    State(state): State<AppState>,
    Json(params): Json<ScreenshotParams>,
) -> Result<Json<Value>, AppError> {
    debug!(count = params.addresses.len(), "Screenshotting addresses");

    let results = screenshotter::capture(
        &state.geocoding,
        state.renderer.as_ref(),
        &state.screenshot_dir,
        &params.addresses,
    )
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "success": true, "results": results })))
}

/// GET /screenshots/{filename}
///
/// Serves a previously captured image. Saved names only ever contain
/// alphanumerics and underscores, so anything path-like is rejected.
pub async fn get_screenshot(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return AppError::NotFound("Screenshot not found".into()).into_response();
    }

    let path = state.screenshot_dir.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "image/png")
            .body(Body::from(bytes))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            warn!(filename = %filename, error = %e, "Screenshot not found");
            AppError::NotFound("Screenshot not found".into()).into_response()
        }
    }
}
