//! NWS weather client
//!
//! HTTP client for the api.weather.gov point and gridpoint forecast endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{Forecast, ForecastResponse, PointMetadata, PointsResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The API answered with something other than 200 OK
    ///
    /// Displays as the bare HTTP reason phrase.
    #[error("{reason}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase, e.g. "Service Unavailable"
        reason: String,
    },

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 2)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Client identifier sent as `User-Agent`, required by the API
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_timeout() -> u64 {
    2
}

fn default_user_agent() -> String {
    "NWSWeatherPlugin/1.0".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for the NWS endpoints the plugin uses
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Look up the forecast grid cell covering a coordinate pair
    async fn get_point(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointMetadata, WeatherError>;

    /// Fetch the multi-period forecast for a grid cell
    async fn get_forecast(
        &self,
        grid_id: &str,
        grid_x: u32,
        grid_y: u32,
    ) -> Result<Forecast, WeatherError>;
}

/// api.weather.gov HTTP client implementation
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the point lookup URL
    ///
    /// The API redirects requests with more than four decimals, so the
    /// coordinates are rounded here.
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{},{}",
            self.config.base_url.trim_end_matches('/'),
            format_coordinate(latitude),
            format_coordinate(longitude)
        )
    }

    /// Build the gridpoint forecast URL
    fn build_forecast_url(&self, grid_id: &str, grid_x: u32, grid_y: u32) -> String {
        format!(
            "{}/gridpoints/{grid_id}/{grid_x},{grid_y}/forecast",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Issue a GET and decode a 200 response body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let response = Self::ensure_ok(response).await?;

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn map_request_error(&self, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Reject anything but 200 OK, carrying the reason phrase
    async fn ensure_ok(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let reason = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();

        // Problem details are only logged; the reason phrase is the error.
        if let Ok(body) = response.text().await {
            warn!(status = status.as_u16(), body = %body, "Weather API returned an error");
        }

        Err(WeatherError::UnexpectedStatus {
            status: status.as_u16(),
            reason,
        })
    }
}

/// Render a coordinate with at most four decimals and no trailing zeros
fn format_coordinate(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_point(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointMetadata, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Looking up forecast grid point");

        let response: PointsResponse = self.get_json(&url).await?;
        Ok(PointMetadata::from(response))
    }

    #[instrument(skip(self))]
    async fn get_forecast(
        &self,
        grid_id: &str,
        grid_x: u32,
        grid_y: u32,
    ) -> Result<Forecast, WeatherError> {
        let url = self.build_forecast_url(grid_id, grid_x, grid_y);
        debug!(url = %url, "Fetching gridpoint forecast");

        let response: ForecastResponse = self.get_json(&url).await?;
        let forecast = Forecast::from(response);
        debug!(
            periods = forecast.periods.len(),
            updated = forecast.updated.as_deref().unwrap_or_default(),
            "Forecast received"
        );
        Ok(forecast)
    }
}
