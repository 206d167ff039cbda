//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unsupported locale tag
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("grid id is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: grid id is empty");
    }

    #[test]
    fn unsupported_locale_message() {
        let err = DomainError::UnsupportedLocale("de-DE".to_string());
        assert_eq!(err.to_string(), "Unsupported locale: de-DE");
    }
}
