use std::time::Duration;

use tracing::{debug, warn};

use crate::error::GeocodingError;
use crate::types::{GeoPoint, GeocodeResponse, GeocodeResult};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Client for the Google Geocoding and Static Maps web services
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodingClient {
    /// Create a new client against the production Google endpoints
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a new client against a custom base URL (used by tests)
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Reverse geocode a coordinate to its first formatted address.
    ///
    /// Returns `Ok(None)` when the API answers with a non-"OK" status or an
    /// empty result list. Transport failures and non-2xx responses are errors.
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> crate::Result<Option<String>> {
        let url = format!(
            "{}/geocode/json?latlng={},{}&key={}",
            self.base_url, lat, lng, self.api_key
        );

        let data = self.get_geocode(&url).await?;

        match first_result(&data) {
            Some(result) => {
                debug!(lat, lng, address = %result.formatted_address, "Reverse geocoded point");
                Ok(Some(result.formatted_address.clone()))
            }
            None => {
                warn!(lat, lng, status = %data.status, "Reverse geocoding returned no results");
                Ok(None)
            }
        }
    }

    /// Forward geocode an address to its first coordinate.
    pub async fn forward_geocode(&self, address: &str) -> crate::Result<Option<GeoPoint>> {
        let url = format!(
            "{}/geocode/json?address={}&key={}",
            self.base_url,
            urlencoding::encode(address),
            self.api_key
        );

        let data = self.get_geocode(&url).await?;

        match first_result(&data) {
            Some(result) => {
                let point = result.geometry.location;
                debug!(address, lat = point.lat, lng = point.lng, "Forward geocoded address");
                Ok(Some(point))
            }
            None => {
                warn!(address, status = %data.status, "Forward geocoding returned no results");
                Ok(None)
            }
        }
    }

    /// Build a satellite Static Maps URL centered on `point` with a red marker.
    pub fn static_map_url(&self, point: &GeoPoint, zoom: u8, width: u32, height: u32) -> String {
        let GeoPoint { lat, lng } = *point;
        format!(
            "{base}/staticmap?center={lat},{lng}&zoom={zoom}&size={width}x{height}&maptype=satellite&markers=color:red%7C{lat},{lng}&key={key}",
            base = self.base_url,
            key = self.api_key,
        )
    }

    async fn get_geocode(&self, url: &str) -> crate::Result<GeocodeResponse> {
        let response = self.http.get(url).send().await.map_err(GeocodingError::Http)?;

        if !response.status().is_success() {
            return Err(GeocodingError::ApiError(format!(
                "Geocoding API returned status {}",
                response.status()
            )));
        }

        response.json().await.map_err(GeocodingError::Http)
    }
}

/// First result of an "OK" response, if any
fn first_result(data: &GeocodeResponse) -> Option<&GeocodeResult> {
    if data.status != "OK" {
        return None;
    }
    data.results.first()
}
