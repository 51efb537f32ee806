mod config;
mod error;
mod routes;
mod sampler;
mod screenshotter;
mod state;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use google_maps_client::GeocodingClient;
use map_renderer::{Viewport, WebDriverRenderer};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "areashot_server=info".into()),
        )
        .init();

    let config = Config::from_env();
    info!(port = config.port, "Starting areashot-server");

    let viewport = Viewport {
        width: screenshotter::CAPTURE_WIDTH,
        height: screenshotter::CAPTURE_HEIGHT,
    };

    let state = AppState {
        geocoding: Arc::new(GeocodingClient::new(&config.google_api_key)),
        renderer: Arc::new(WebDriverRenderer::new(&config.webdriver_url, viewport)),
        screenshot_dir: config.screenshot_dir.clone(),
        started_at: Utc::now(),
    };

    let app = create_router(state, &config.public_path);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}

/// Create the HTTP router: the JSON API, saved screenshots, and the static
/// UI as a fallback.
fn create_router(state: AppState, public_path: &str) -> Router {
    let ui = ServeDir::new(public_path)
        .fallback(ServeFile::new(format!("{public_path}/index.html")));

    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/addresses_in_area",
            post(routes::addresses::addresses_in_area),
        )
        .route(
            "/api/screenshot_addresses",
            post(routes::screenshots::screenshot_addresses),
        )
        .route(
            "/screenshots/{filename}",
            get(routes::screenshots::get_screenshot),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
        .fallback_service(ui)
}
