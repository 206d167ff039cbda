//! In-memory profile store

use application::error::ApplicationError;
use application::ports::ProfileStorePort;
use async_trait::async_trait;
use domain::ProfilePath;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::ProfileDocument;

/// Profile kept only in memory; `save` just counts calls
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    document: RwLock<ProfileDocument>,
    saves: AtomicUsize,
}

impl InMemoryProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    #[must_use]
    pub fn with_document(document: ProfileDocument) -> Self {
        Self {
            document: RwLock::new(document),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> ProfileDocument {
        self.document.read().clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStorePort for InMemoryProfileStore {
    async fn get(&self, path: &ProfilePath) -> Result<Option<Value>, ApplicationError> {
        Ok(self.document.read().get(path).cloned())
    }

    async fn set(&self, path: &ProfilePath, value: Value) -> Result<(), ApplicationError> {
        self.document.write().set(path, value)?;
        Ok(())
    }

    async fn save(&self) -> Result<(), ApplicationError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
