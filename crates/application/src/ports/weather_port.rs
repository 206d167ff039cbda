//! Weather service port
//!
//! Defines the interface for grid lookup and forecast retrieval.

use async_trait::async_trait;
use domain::{ForecastPeriod, GeoLocation, GridLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Find the forecast grid cell covering a location
    async fn lookup_grid(&self, location: &GeoLocation) -> Result<GridLocation, ApplicationError>;

    /// Fetch forecast periods for a grid cell, in API order
    ///
    /// A non-200 answer maps to `ApplicationError::ForecastRejected`
    /// carrying the HTTP reason phrase.
    async fn get_forecast(
        &self,
        grid: &GridLocation,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError>;
}
