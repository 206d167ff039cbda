//! Profile store port
//!
//! The user profile is a nested key/value document addressed by
//! [`ProfilePath`]. Writes stay in memory until [`ProfileStorePort::save`].

use async_trait::async_trait;
use domain::ProfilePath;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Port for hierarchical profile storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Read the value at a path, `None` if any segment is missing
    async fn get(&self, path: &ProfilePath) -> Result<Option<Value>, ApplicationError>;

    /// Write a value, creating intermediate tables as needed
    async fn set(&self, path: &ProfilePath, value: Value) -> Result<(), ApplicationError>;

    /// Persist all pending writes
    async fn save(&self) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ProfileStorePort) {}

    #[tokio::test]
    async fn mock_profile_store_get() {
        let mut mock = MockProfileStorePort::new();
        mock.expect_get()
            .withf(|path| *path == ProfilePath::address())
            .returning(|_| Ok(Some(Value::String("Boise, ID".to_string()))));

        let value = mock.get(&ProfilePath::address()).await.unwrap();
        assert_eq!(value, Some(Value::String("Boise, ID".to_string())));
    }
}
