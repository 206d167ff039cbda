//! TOML file-backed profile store
//!
//! The whole profile is read once on open and held in memory. `set` only
//! touches the in-memory copy; `save` rewrites the file atomically.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ProfileStorePort;
use async_trait::async_trait;
use domain::ProfilePath;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{ProfileDocument, ProfileStoreError};

/// Profile persisted as a TOML document
#[derive(Debug)]
pub struct TomlProfileStore {
    path: PathBuf,
    document: RwLock<ProfileDocument>,
}

impl TomlProfileStore {
    /// Open a profile file; a missing file starts an empty profile
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ProfileStoreError> {
        let path = path.as_ref().to_path_buf();
        let document = match tokio::fs::read_to_string(&path).await {
            Ok(text) => toml::from_str(&text).map_err(|e| ProfileStoreError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Profile file not found, starting empty");
                ProfileDocument::new()
            },
            Err(source) => return Err(ProfileStoreError::Io { path, source }),
        };

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ProfileStoreError {
        ProfileStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn write_file(&self) -> Result<(), ProfileStoreError> {
        let rendered = toml::to_string_pretty(&*self.document.read())
            .map_err(|e| ProfileStoreError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let staging = self.path.with_extension("toml.tmp");
        tokio::fs::write(&staging, rendered)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }
}

#[async_trait]
impl ProfileStorePort for TomlProfileStore {
    async fn get(&self, path: &ProfilePath) -> Result<Option<Value>, ApplicationError> {
        Ok(self.document.read().get(path).cloned())
    }

    async fn set(&self, path: &ProfilePath, value: Value) -> Result<(), ApplicationError> {
        self.document.write().set(path, value)?;
        debug!(%path, "Profile value set");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self) -> Result<(), ApplicationError> {
        self.write_file().await?;
        info!("Profile saved");
        Ok(())
    }
}
