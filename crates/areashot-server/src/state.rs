use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use google_maps_client::GeocodingClient;
use map_renderer::Renderer;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoding: Arc<GeocodingClient>,
    pub renderer: Arc<dyn Renderer>,
    pub screenshot_dir: PathBuf,
    pub started_at: DateTime<Utc>,
}
