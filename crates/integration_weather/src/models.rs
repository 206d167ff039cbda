//! NWS API data models
//!
//! Wire types for the `/points` and `/gridpoints/.../forecast` GeoJSON
//! documents, plus the flattened types the client hands out.

use serde::{Deserialize, Serialize};

/// Grid metadata for a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointMetadata {
    /// Forecast office identifier (e.g. "SEW")
    pub grid_id: String,
    /// Grid cell X offset
    pub grid_x: u32,
    /// Grid cell Y offset
    pub grid_y: u32,
    /// Nearest city, if the API reports one
    pub city: Option<String>,
    /// Nearest state, if the API reports one
    pub state: Option<String>,
}

/// Decoded forecast document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// When the forecast office last updated this forecast
    pub updated: Option<String>,
    /// Periods in the order the API returned them
    pub periods: Vec<ForecastPeriod>,
}

/// One forecast period (e.g. "Tonight")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// 1-based period number
    #[serde(default)]
    pub number: u32,
    /// Period name
    pub name: String,
    /// ISO 8601 start time with offset
    pub start_time: String,
    /// ISO 8601 end time with offset
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_daytime: Option<bool>,
    /// Temperature in `temperature_unit`
    #[serde(default)]
    pub temperature: Option<i32>,
    /// "F" or "C"
    #[serde(default)]
    pub temperature_unit: Option<String>,
    /// e.g. "5 to 10 mph"
    #[serde(default)]
    pub wind_speed: Option<String>,
    /// Compass direction, e.g. "NW"
    #[serde(default)]
    pub wind_direction: Option<String>,
    /// Short summary, e.g. "Mostly Sunny"
    #[serde(default)]
    pub short_forecast: Option<String>,
    /// Full text forecast
    #[serde(default)]
    pub detailed_forecast: String,
}

// ============================================================================
// Raw API documents
// ============================================================================

/// Raw `/points/{lat},{lon}` response
#[derive(Debug, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PointProperties {
    pub grid_id: String,
    pub grid_x: u32,
    pub grid_y: u32,
    #[serde(default)]
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelativeLocationProperties {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl From<PointsResponse> for PointMetadata {
    fn from(response: PointsResponse) -> Self {
        let props = response.properties;
        let (city, state) = props
            .relative_location
            .map_or((None, None), |rel| (rel.properties.city, rel.properties.state));
        Self {
            grid_id: props.grid_id,
            grid_x: props.grid_x,
            grid_y: props.grid_y,
            city,
            state,
        }
    }
}

/// Raw `/gridpoints/{id}/{x},{y}/forecast` response
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastProperties {
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

impl From<ForecastResponse> for Forecast {
    fn from(response: ForecastResponse) -> Self {
        Self {
            updated: response.properties.updated,
            periods: response.properties.periods,
        }
    }
}
