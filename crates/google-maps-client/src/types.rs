use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair, in Google wire naming (`lat`/`lng`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub(crate) formatted_address: String,
    pub(crate) geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub(crate) location: GeoPoint,
}
