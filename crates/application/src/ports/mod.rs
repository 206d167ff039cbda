//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod profile_store;
mod speech_output_port;
mod weather_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use profile_store::MockProfileStorePort;
pub use profile_store::ProfileStorePort;
#[cfg(test)]
pub use speech_output_port::MockSpeechOutputPort;
pub use speech_output_port::SpeechOutputPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
