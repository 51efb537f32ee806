//! Bounding-box address discovery.
//!
//! Google offers no "list all addresses in a bounding box" endpoint, so the
//! box is sampled on a fixed grid and each point reverse geocoded. Distinct
//! formatted addresses are collected in first-seen order; points that fail
//! or resolve to nothing are reported back to the caller, never propagated.

use std::fmt;

use google_maps_client::{GeoPoint, GeocodingClient};
use tracing::debug;

/// Grid density. 3x3 keeps one sampling call to nine upstream requests.
const GRID_ROWS: usize = 3;
const GRID_COLS: usize = 3;

/// A rectangular lat/lng region. `north > south` and `east > west` are the
/// caller's responsibility and are not validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Why a grid point produced no address
#[derive(Debug)]
pub enum SkipReason {
    RequestFailed(String),
    NoResults,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "request failed: {e}"),
            Self::NoResults => write!(f, "no results"),
        }
    }
}

/// A grid point that produced no address
#[derive(Debug)]
pub struct SkippedPoint {
    pub point: GeoPoint,
    pub reason: SkipReason,
}

/// Outcome of sampling one bounding box
#[derive(Debug, Default)]
pub struct SampleReport {
    /// Unique formatted addresses in first-seen order
    pub addresses: Vec<String>,
    pub skipped: Vec<SkippedPoint>,
}

/// The grid of sample points for `bbox`, row-major from the south-west
/// corner. A degenerate box yields the same point nine times.
fn grid_points(bbox: &BoundingBox) -> Vec<GeoPoint> {
    let lat_step = if GRID_ROWS > 1 {
        (bbox.north - bbox.south) / (GRID_ROWS - 1) as f64
    } else {
        0.0
    };
    let lng_step = if GRID_COLS > 1 {
        (bbox.east - bbox.west) / (GRID_COLS - 1) as f64
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for i in 0..GRID_ROWS {
        for j in 0..GRID_COLS {
            points.push(GeoPoint {
                lat: bbox.south + i as f64 * lat_step,
                lng: bbox.west + j as f64 * lng_step,
            });
        }
    }
    points
}

/// Reverse geocode a fixed grid over `bbox`, collecting unique addresses.
///
/// Every grid point is attempted; a failed or empty point lands in
/// [`SampleReport::skipped`] and never fails the batch. The report may be
/// entirely empty.
pub async fn sample(geocoding: &GeocodingClient, bbox: &BoundingBox) -> SampleReport {
    let mut report = SampleReport::default();

    for point in grid_points(bbox) {
        let reason = match geocoding.reverse_geocode(point.lat, point.lng).await {
            Ok(Some(address)) => {
                if !report.addresses.contains(&address) {
                    debug!(lat = point.lat, lng = point.lng, address = %address, "Discovered address");
                    report.addresses.push(address);
                }
                continue;
            }
            Ok(None) => SkipReason::NoResults,
            Err(e) => SkipReason::RequestFailed(e.to_string()),
        };

        report.skipped.push(SkippedPoint { point, reason });
    }

    debug!(
        found = report.addresses.len(),
        skipped = report.skipped.len(),
        "Sampling complete"
    );
    report
}
