//! Geocoding port
//!
//! Turns a free-text address into coordinates.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    ///
    /// An address with no match is an error, never a default location.
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError>;
}
