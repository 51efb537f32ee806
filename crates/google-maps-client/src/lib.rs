//! Google Maps Platform Client
//!
//! A typed client for the Google Maps web services used by areashot:
//! forward and reverse [Geocoding](https://developers.google.com/maps/documentation/geocoding)
//! plus [Static Maps](https://developers.google.com/maps/documentation/maps-static) URL
//! construction. The API key is supplied by the caller and never logged.

mod client;
mod error;
mod types;

pub use client::GeocodingClient;
pub use error::{GeocodingError, Result};
pub use types::GeoPoint;
