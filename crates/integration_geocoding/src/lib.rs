//! Address geocoding for the NWS weather plugin
//!
//! Converts the user's free-form home address into coordinates using the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`].

mod error;
mod nominatim;

pub use error::GeocodingError;
pub use nominatim::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
