//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the NWS and
//! Nominatim clients, the profile stores and the speech sinks. Also owns
//! configuration loading, logging setup and handler wiring.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;
mod wiring;

pub use adapters::*;
pub use config::{
    AppConfig, GeocodingAppConfig, PluginConfig, ProfileConfig, WeatherAppConfig,
};
pub use persistence::{InMemoryProfileStore, ProfileStoreError, TomlProfileStore};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
pub use wiring::{build_weather_handler, open_profile_store};
