//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `integrations`: NWS weather API, Nominatim geocoding
//!
//! Logging settings live with the subscriber setup in `telemetry`.
//!
//! Sources, later ones winning: built-in defaults, an optional
//! `config.toml`, then `NWS_WEATHER_*` environment variables where `__`
//! separates nesting levels (e.g. `NWS_WEATHER_PLUGIN__LOCALE=fr-FR`).

mod integrations;

use std::{collections::HashMap, path::PathBuf};

use domain::Locale;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

pub use integrations::{GeocodingAppConfig, WeatherAppConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NWS_WEATHER";

/// Default configuration file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Plugin identity and language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Locale for keyword tables and spoken messages
    #[serde(default)]
    pub locale: Locale,

    /// Client identifier sent as `User-Agent` to both APIs
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    "NWSWeatherPlugin/1.0".to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            user_agent: default_user_agent(),
        }
    }
}

/// Profile storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// TOML file holding the user profile
    #[serde(default = "default_profile_path")]
    pub path: PathBuf,
}

fn default_profile_path() -> PathBuf {
    PathBuf::from("profile.toml")
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: default_profile_path(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Plugin identity and locale
    #[serde(default)]
    pub plugin: PluginConfig,

    /// NWS API settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Geocoding settings
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Profile storage settings
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE, None)
    }

    /// Load from a named configuration file and an environment snapshot
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of the variables set around them.
    pub fn load_from(
        file: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., NWS_WEATHER_WEATHER__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
