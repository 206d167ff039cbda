//! Integration configurations: NWS weather API and Nominatim geocoding.

use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// NWS API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// api.weather.gov base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_weather_timeout() -> u64 {
    2
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Client configuration sending `user_agent` as the client identifier
    #[must_use]
    pub fn to_client_config(&self, user_agent: &str) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: user_agent.to_string(),
        }
    }
}

// ==============================
// Geocoding Configuration
// ==============================

/// Nominatim geocoding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim base URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_secs: u64,

    /// ISO country code filter; empty searches worldwide
    #[serde(default = "default_country_filter")]
    pub country_filter: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout() -> u64 {
    5
}

fn default_country_filter() -> String {
    "us".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout(),
            country_filter: default_country_filter(),
        }
    }
}

impl GeocodingAppConfig {
    #[must_use]
    pub fn to_client_config(&self, user_agent: &str) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            country_filter: self.country_filter.clone(),
            user_agent: user_agent.to_string(),
        }
    }
}
