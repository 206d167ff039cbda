//! Domain layer for the NWS weather plugin
//!
//! Contains the forecast model, grid/location value objects and domain errors.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
