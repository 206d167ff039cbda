//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod speech_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use speech_adapter::{ConsoleSpeechAdapter, RecordingSpeechAdapter};
pub use weather_adapter::WeatherAdapter;
