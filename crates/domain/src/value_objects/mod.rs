//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod grid_location;
mod locale;
mod profile_path;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use grid_location::GridLocation;
pub use locale::Locale;
pub use profile_path::{GridField, PLUGIN_NAMESPACE, ProfilePath};
