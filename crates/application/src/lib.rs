//! Application layer - Use cases and orchestration
//!
//! Contains the weather intent handler, the intent and settings
//! registration tables, the localized message catalog and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod intents;
pub mod messages;
pub mod ports;
pub mod services;
pub mod settings;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ApplicationError;
pub use intents::{IntentDefinition, KeywordMatcher, KeywordSlot, LocaleIntent, WEATHER_INTENT};
pub use messages::Messages;
pub use ports::*;
pub use services::*;
pub use settings::{SettingField, settings};
