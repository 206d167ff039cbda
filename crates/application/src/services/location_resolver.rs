//! Location resolver
//!
//! Maps a configured address to its forecast grid cell. The first request
//! for an address geocodes it and asks the weather service for the grid;
//! the answer is cached in the profile under the address and trusted from
//! then on.

use std::{fmt, sync::Arc};

use domain::{GridField, GridLocation, ProfilePath};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, ProfileStorePort, WeatherPort},
};

/// Resolves addresses to grid cells, caching results in the profile
pub struct LocationResolver {
    geocoder: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
    profile: Arc<dyn ProfileStorePort>,
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

impl LocationResolver {
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        profile: Arc<dyn ProfileStorePort>,
    ) -> Self {
        Self {
            geocoder,
            weather,
            profile,
        }
    }

    /// Grid cell for an address
    ///
    /// A cached entry counts as present when its `gridId` holds a non-empty
    /// value. Otherwise the address is geocoded, the grid looked up, the
    /// three fields stored and the profile saved. Lookup failures propagate
    /// and leave the profile untouched.
    #[instrument(skip(self))]
    pub async fn resolve(&self, address: &str) -> Result<GridLocation, ApplicationError> {
        let id_path = ProfilePath::grid_field(address, GridField::GridId);
        let cached = self.profile.get(&id_path).await?;

        if cached.as_ref().is_some_and(is_truthy) {
            debug!("Using cached grid location");
        } else {
            self.lookup_and_store(address).await?;
        }

        self.read_cached(address).await
    }

    async fn lookup_and_store(&self, address: &str) -> Result<(), ApplicationError> {
        let location = self.geocoder.geocode(address).await?;
        debug!(%location, "Geocoded address");

        let grid = self.weather.lookup_grid(&location).await?;
        info!(%grid, "Caching grid location for address");

        self.profile
            .set(
                &ProfilePath::grid_field(address, GridField::GridId),
                Value::from(grid.grid_id()),
            )
            .await?;
        self.profile
            .set(
                &ProfilePath::grid_field(address, GridField::GridX),
                Value::from(grid.grid_x()),
            )
            .await?;
        self.profile
            .set(
                &ProfilePath::grid_field(address, GridField::GridY),
                Value::from(grid.grid_y()),
            )
            .await?;
        self.profile.save().await
    }

    async fn read_cached(&self, address: &str) -> Result<GridLocation, ApplicationError> {
        let id_path = ProfilePath::grid_field(address, GridField::GridId);
        let grid_id = match self.profile.get(&id_path).await? {
            Some(Value::String(id)) if !id.trim().is_empty() => id,
            Some(other) => {
                return Err(ApplicationError::corrupt_profile(
                    &id_path,
                    format!("expected a grid id string, found {other}"),
                ));
            },
            None => return Err(ApplicationError::corrupt_profile(&id_path, "missing")),
        };

        let grid_x = self.read_offset(address, GridField::GridX).await?;
        let grid_y = self.read_offset(address, GridField::GridY).await?;

        Ok(GridLocation::new(grid_id, grid_x, grid_y)?)
    }

    async fn read_offset(&self, address: &str, field: GridField) -> Result<u32, ApplicationError> {
        let path = ProfilePath::grid_field(address, field);
        let value = self
            .profile
            .get(&path)
            .await?
            .ok_or_else(|| ApplicationError::corrupt_profile(&path, "missing"))?;

        grid_offset(&value)
            .ok_or_else(|| ApplicationError::corrupt_profile(&path, format!("not a grid offset: {value}")))
    }
}

/// Integer grid offset; string values written by hand are accepted too
fn grid_offset(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Whether a cached value counts as present
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
