//! Weather service grid cell value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A forecast office grid cell (`gridId` plus `gridX`/`gridY` offsets)
///
/// Cached per address and trusted without revalidation once stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct GridLocation {
    grid_id: String,
    grid_x: u32,
    grid_y: u32,
}

impl GridLocation {
    /// Create a new grid location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the grid id is blank.
    pub fn new(grid_id: impl Into<String>, grid_x: u32, grid_y: u32) -> Result<Self, DomainError> {
        let grid_id = grid_id.into().trim().to_string();
        if grid_id.is_empty() {
            return Err(DomainError::ValidationError(
                "grid id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            grid_id,
            grid_x,
            grid_y,
        })
    }

    /// Forecast office identifier (e.g. "SEW")
    #[must_use]
    pub fn grid_id(&self) -> &str {
        &self.grid_id
    }

    #[must_use]
    pub const fn grid_x(&self) -> u32 {
        self.grid_x
    }

    #[must_use]
    pub const fn grid_y(&self) -> u32 {
        self.grid_y
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{},{}", self.grid_id, self.grid_x, self.grid_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_grid_id() {
        let grid = GridLocation::new("  SEW ", 124, 67).expect("valid grid");
        assert_eq!(grid.grid_id(), "SEW");
        assert_eq!(grid.grid_x(), 124);
        assert_eq!(grid.grid_y(), 67);
    }

    #[test]
    fn blank_grid_id_rejected() {
        assert!(GridLocation::new("   ", 1, 1).is_err());
    }

    #[test]
    fn display_matches_gridpoint_path() {
        let grid = GridLocation::new("ILX", 61, 51).expect("valid grid");
        assert_eq!(grid.to_string(), "ILX/61,51");
    }

    #[test]
    fn serializes_with_api_field_names() {
        let grid = GridLocation::new("TOP", 31, 80).expect("valid grid");
        let json = serde_json::to_value(&grid).expect("serialize");
        assert_eq!(json["gridId"], "TOP");
        assert_eq!(json["gridX"], 31);
        assert_eq!(json["gridY"], 80);
    }
}
