//! Satellite screenshot capture.
//!
//! Each address is forward geocoded, turned into a satellite Static Maps
//! URL, and rendered through a browser session. One session serves the whole
//! batch and is closed exactly once at the end; per-address failures are
//! recorded in the result list and never abort the batch.

use std::fmt;
use std::path::Path;

use google_maps_client::GeocodingClient;
use map_renderer::{RenderError, RenderSession, Renderer};
use serde::Serialize;
use tracing::{debug, error, warn};

/// Static map zoom level (building scale)
const MAP_ZOOM: u8 = 18;

/// Capture dimensions, matched to the browser viewport
pub const CAPTURE_WIDTH: u32 = 800;
pub const CAPTURE_HEIGHT: u32 = 600;

/// Per-address capture outcome. `screenshot` carries the saved file path on
/// success; `error` is set instead when the address could not be captured.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenshotResult {
    pub address: String,
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScreenshotResult {
    fn saved(address: &str, path: &Path) -> Self {
        Self {
            address: address.to_string(),
            screenshot: Some(path.to_string_lossy().into_owned()),
            error: None,
        }
    }

    fn failed(address: &str, reason: &str) -> Self {
        Self {
            address: address.to_string(),
            screenshot: None,
            error: Some(reason.to_string()),
        }
    }
}

/// Errors that abort a capture batch before any address is processed
#[derive(Debug)]
pub enum CaptureError {
    Renderer(RenderError),
    Io(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renderer(e) => write!(f, "renderer error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Renderer(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

/// Capture a satellite screenshot for each address, in input order.
///
/// Creating the output directory or opening the browser session fails the
/// whole call with no partial results. Everything after that is recorded per
/// address. Addresses are not deduplicated: a repeated address is captured
/// again and overwrites the same file.
pub async fn capture(
    geocoding: &GeocodingClient,
    renderer: &dyn Renderer,
    screenshot_dir: &Path,
    addresses: &[String],
) -> Result<Vec<ScreenshotResult>, CaptureError> {
    tokio::fs::create_dir_all(screenshot_dir)
        .await
        .map_err(CaptureError::Io)?;

    let mut session = renderer.open().await.map_err(CaptureError::Renderer)?;

    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        results.push(capture_one(geocoding, session.as_mut(), screenshot_dir, address).await);
    }

    if let Err(e) = session.close().await {
        warn!(error = %e, "Failed to close browser session");
    }

    Ok(results)
}

async fn capture_one(
    geocoding: &GeocodingClient,
    session: &mut dyn RenderSession,
    screenshot_dir: &Path,
    address: &str,
) -> ScreenshotResult {
    let point = match geocoding.forward_geocode(address).await {
        Ok(Some(point)) => point,
        Ok(None) => {
            warn!(address, "No geocoding result for address");
            return ScreenshotResult::failed(address, "Geocoding returned no results");
        }
        Err(e) => {
            error!(address, error = %e, "Error geocoding address");
            return ScreenshotResult::failed(address, "Geocoding failed");
        }
    };

    let url = geocoding.static_map_url(&point, MAP_ZOOM, CAPTURE_WIDTH, CAPTURE_HEIGHT);
    let path = screenshot_dir.join(format!("{}.png", safe_filename(address)));

    match session.render(&url).await {
        Ok(png) => {
            if let Err(e) = tokio::fs::write(&path, png).await {
                error!(address, error = %e, "Failed to write screenshot");
                return ScreenshotResult::failed(address, "Screenshot failed");
            }
        }
        Err(e) => {
            error!(address, error = %e, "Failed to render static map");
            return ScreenshotResult::failed(address, "Screenshot failed");
        }
    }

    debug!(address, path = %path.display(), "Saved screenshot");
    ScreenshotResult::saved(address, &path)
}

/// Reduce an address to a filename: every non-alphanumeric character
/// becomes an underscore.
fn safe_filename(address: &str) -> String {
    address
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
