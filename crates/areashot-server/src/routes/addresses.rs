use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::sampler::{self, BoundingBox};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AreaParams {
    north: Option<f64>,
    east: Option<f64>,
    south: Option<f64>,
    west: Option<f64>,
}

/// POST /api/addresses_in_area
pub async fn addresses_in_area(
    State(state): State<AppState>,
    Json(params): Json<AreaParams>,
) -> Result<Json<Value>, AppError> {
    let north = params
        .north
        .ok_or_else(|| AppError::BadRequest("north is required".into()))?;
    let east = params
        .east
        .ok_or_else(|| AppError::BadRequest("east is required".into()))?;
    let south = params
        .south
        .ok_or_else(|| AppError::BadRequest("south is required".into()))?;
    let west = params
        .west
        .ok_or_else(|| AppError::BadRequest("west is required".into()))?;

    debug!(north, east, south, west, "Sampling bounding box");

    let bbox = BoundingBox {
        north,
        south,
        east,
        west,
    };
    let report = sampler::sample(&state.geocoding, &bbox).await;

    for skip in &report.skipped {
        warn!(lat = skip.point.lat, lng = skip.point.lng, reason = %skip.reason, "Grid point skipped");
    }

    Ok(Json(json!({ "addresses": report.addresses })))
}
