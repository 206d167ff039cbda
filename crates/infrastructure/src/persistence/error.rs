//! Profile store errors and their mapping to the application layer

use std::path::PathBuf;

use application::error::ApplicationError;
use thiserror::Error;

/// Errors raised by the profile stores
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a valid TOML table
    #[error("Invalid profile file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The document could not be rendered as TOML
    #[error("Failed to serialize profile: {0}")]
    Serialize(String),

    /// A path with no segments was used
    #[error("Profile path must not be empty")]
    EmptyPath,

    /// An intermediate segment holds a scalar instead of a table
    #[error("{0} is not a table")]
    NotATable(String),

    /// Null cannot be stored
    #[error("Cannot store null at {0}")]
    NullValue(String),
}

impl From<ProfileStoreError> for ApplicationError {
    fn from(err: ProfileStoreError) -> Self {
        Self::ProfileStore(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_profile_store_error() {
        let err: ApplicationError = ProfileStoreError::EmptyPath.into();
        assert!(matches!(err, ApplicationError::ProfileStore(_)));
        assert_eq!(
            err.to_string(),
            "Profile store error: Profile path must not be empty"
        );
    }
}
