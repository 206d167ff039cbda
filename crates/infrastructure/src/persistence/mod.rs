//! Persistence module
//!
//! Profile stores: a TOML file for real use and an in-memory map for
//! embedding and tests. Both keep the profile as one nested document.

mod document;
mod error;
mod memory_profile_store;
mod toml_profile_store;

pub use document::ProfileDocument;
pub use error::ProfileStoreError;
pub use memory_profile_store::InMemoryProfileStore;
pub use toml_profile_store::TomlProfileStore;
