//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::GeoLocation;
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::instrument;

/// Adapter for Nominatim address lookup
pub struct GeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration geocoding error to application error
    fn map_error(err: &GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::AddressNotFound(_) => ApplicationError::Geocoding(err.to_string()),
            GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::Timeout => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError> {
        self.client.geocode(address).await.map_err(|e| Self::map_error(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoMatch;

    #[async_trait]
    impl GeocodingClient for NoMatch {
        async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodingError> {
            Err(GeocodingError::AddressNotFound(address.to_string()))
        }
    }

    #[test]
    fn test_geocoding_adapter_creation() {
        assert!(GeocodingAdapter::with_config(&NominatimConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_no_match_is_geocoding_error() {
        let adapter = GeocodingAdapter::with_client(NoMatch);
        let err = adapter.geocode("Nowhere").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Geocoding(_)));
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn test_map_error_timeout() {
        let err = GeocodingAdapter::map_error(&GeocodingError::Timeout);
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
