//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{ForecastPeriod, GeoLocation, GridLocation};
use integration_weather::{
    ForecastPeriod as IntegrationPeriod, NwsClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the api.weather.gov point and forecast endpoints
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"NwsClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            NwsClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map a point lookup failure, naming the call a non-200 came from
    fn map_point_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::UnexpectedStatus { reason, .. } => {
                ApplicationError::ExternalService(format!("Point lookup failed: {reason}"))
            },
            other => Self::map_error(other),
        }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            err @ WeatherError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
            WeatherError::UnexpectedStatus { reason, .. } => {
                ApplicationError::ForecastRejected(reason)
            },
            WeatherError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Malformed weather response: {e}"))
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("Invalid coordinates".into())
            },
        }
    }

    fn map_period(period: IntegrationPeriod) -> ForecastPeriod {
        ForecastPeriod::new(period.start_time, period.name, period.detailed_forecast)
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn lookup_grid(&self, location: &GeoLocation) -> Result<GridLocation, ApplicationError> {
        let point = self
            .client
            .get_point(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_point_error)?;

        debug!(
            grid_id = %point.grid_id,
            grid_x = point.grid_x,
            grid_y = point.grid_y,
            city = point.city.as_deref().unwrap_or_default(),
            state = point.state.as_deref().unwrap_or_default(),
            "Resolved forecast grid"
        );

        Ok(GridLocation::new(point.grid_id, point.grid_x, point.grid_y)?)
    }

    #[instrument(skip(self), fields(grid = %grid))]
    async fn get_forecast(
        &self,
        grid: &GridLocation,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(grid.grid_id(), grid.grid_x(), grid.grid_y())
            .await
            .map_err(Self::map_error)?;

        Ok(forecast.periods.into_iter().map(Self::map_period).collect())
    }
}
