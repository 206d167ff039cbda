//! National Weather Service integration
//!
//! Client for the NWS public API (<https://api.weather.gov>).
//! Resolves coordinates to forecast grid cells and fetches multi-period
//! forecasts. The API needs no key, only an identifying `User-Agent`.

pub mod client;
mod models;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{Forecast, ForecastPeriod, PointMetadata};
