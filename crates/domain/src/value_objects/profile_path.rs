//! Hierarchical profile key paths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level profile section owned by this plugin
pub const PLUGIN_NAMESPACE: &str = "nws_weather";

/// Grid fields cached under an address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    GridId,
    GridX,
    GridY,
}

impl GridField {
    /// Key used in the profile (matches the API's property names)
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::GridId => "gridId",
            Self::GridX => "gridX",
            Self::GridY => "gridY",
        }
    }
}

/// A path into the nested user profile, e.g. `["nws_weather", "address"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePath(Vec<String>);

impl ProfilePath {
    /// Build a path from its segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// `["nws_weather", "address"]`, the configured home address
    #[must_use]
    pub fn address() -> Self {
        Self::new([PLUGIN_NAMESPACE, "address"])
    }

    /// `["nws_weather", <address>, <field>]`, a cached grid field
    #[must_use]
    pub fn grid_field(address: &str, field: GridField) -> Self {
        Self::new([PLUGIN_NAMESPACE, address, field.key()])
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
