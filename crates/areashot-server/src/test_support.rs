//! Shared test fixtures: a stand-in for the Google geocoding API bound to an
//! ephemeral local port, and a renderer that never touches a browser.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use google_maps_client::GeocodingClient;
use map_renderer::{RenderError, RenderSession, Renderer};
use serde_json::{json, Value};

/// Behavior switch for the fake geocoder
#[derive(Clone)]
pub enum GeocodeMode {
    /// Answer with an address derived from the query, distinct per point
    AddressPerQuery,
    /// Answer every request with the same address
    FixedAddress(&'static str),
    /// Answer "ZERO_RESULTS" with an empty result list
    ZeroResults,
    /// Answer HTTP 500
    ServerError,
}

pub struct FakeGeocoder {
    pub base_url: String,
    pub requests: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn client(&self) -> GeocodingClient {
        GeocodingClient::with_base_url(&self.base_url, "test-key")
    }
}

#[derive(Clone)]
struct FakeState {
    mode: GeocodeMode,
    requests: Arc<AtomicUsize>,
}

fn ok_body(address: &str) -> Value {
    json!({
        "status": "OK",
        "results": [{
            "formatted_address": address,
            "geometry": { "location": { "lat": 45.52, "lng": -122.68 } }
        }]
    })
}

async fn geocode(
    State(state): State<FakeState>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    match &state.mode {
        GeocodeMode::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        GeocodeMode::ZeroResults => {
            Json(json!({ "status": "ZERO_RESULTS", "results": [] })).into_response()
        }
        GeocodeMode::FixedAddress(address) => Json(ok_body(address)).into_response(),
        GeocodeMode::AddressPerQuery => {
            // reverse lookups carry latlng, forward lookups carry address
            let key = params
                .get("latlng")
                .or_else(|| params.get("address"))
                .cloned()
                .unwrap_or_default();
            Json(ok_body(&format!("{key} Example St"))).into_response()
        }
    }
}

/// Serve the fake geocoding API on an ephemeral port, counting requests
pub async fn spawn_geocoder(mode: GeocodeMode) -> FakeGeocoder {
    let requests = Arc::new(AtomicUsize::new(0));
    let state = FakeState {
        mode,
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/geocode/json", get(geocode))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGeocoder {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// [`Renderer`] that produces a tiny PNG header without a browser
pub struct MockRenderer {
    pub fail_open: bool,
    pub fail_render: bool,
    pub closed: Arc<AtomicUsize>,
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self {
            fail_open: false,
            fail_render: false,
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Renderer for MockRenderer {
    async fn open(&self) -> map_renderer::Result<Box<dyn RenderSession>> {
        if self.fail_open {
            return Err(RenderError::Session("connection refused".into()));
        }
        Ok(Box::new(MockSession {
            fail_render: self.fail_render,
            closed: Arc::clone(&self.closed),
        }))
    }
}

struct MockSession {
    fail_render: bool,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl RenderSession for MockSession {
    async fn render(&mut self, _url: &str) -> map_renderer::Result<Vec<u8>> {
        if self.fail_render {
            return Err(RenderError::Command("navigation failed".into()));
        }
        Ok(vec![0x89, b'P', b'N', b'G'])
    }

    async fn close(self: Box<Self>) -> map_renderer::Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
