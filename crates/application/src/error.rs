//! Application-level errors

use std::fmt;

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The configured address could not be geocoded
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    /// External service error (network, timeout, malformed response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The forecast endpoint answered with a non-200 status
    ///
    /// Displays as the bare HTTP reason phrase.
    #[error("{0}")]
    ForecastRejected(String),

    /// Reading or writing the profile store failed
    #[error("Profile store error: {0}")]
    ProfileStore(String),

    /// A cached profile value has the wrong shape
    #[error("Corrupt profile value at {path}: {reason}")]
    CorruptProfile { path: String, reason: String },

    /// Speech output failed
    #[error("Speech output failed: {0}")]
    SpeechOutput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a corrupt profile error
    pub fn corrupt_profile(path: &impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::CorruptProfile {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
