//! In-memory port implementations for service tests

use std::collections::HashMap;

use async_trait::async_trait;
use domain::{GridField, ProfilePath};
use parking_lot::Mutex;
use serde_json::Value;

use crate::{
    error::ApplicationError,
    ports::{ProfileStorePort, SpeechOutputPort},
};

/// Flat path-to-value profile that counts saves
#[derive(Debug, Default)]
pub(crate) struct FakeProfileStore {
    values: Mutex<HashMap<ProfilePath, Value>>,
    saves: Mutex<usize>,
}

impl FakeProfileStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seed(&self, path: ProfilePath, value: Value) {
        self.values.lock().insert(path, value);
    }

    pub(crate) fn seed_grid(&self, address: &str, grid_id: Value, grid_x: Value, grid_y: Value) {
        self.seed(ProfilePath::grid_field(address, GridField::GridId), grid_id);
        self.seed(ProfilePath::grid_field(address, GridField::GridX), grid_x);
        self.seed(ProfilePath::grid_field(address, GridField::GridY), grid_y);
    }

    pub(crate) fn value(&self, path: &ProfilePath) -> Option<Value> {
        self.values.lock().get(path).cloned()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

#[async_trait]
impl ProfileStorePort for FakeProfileStore {
    async fn get(&self, path: &ProfilePath) -> Result<Option<Value>, ApplicationError> {
        Ok(self.value(path))
    }

    async fn set(&self, path: &ProfilePath, value: Value) -> Result<(), ApplicationError> {
        self.seed(path.clone(), value);
        Ok(())
    }

    async fn save(&self) -> Result<(), ApplicationError> {
        *self.saves.lock() += 1;
        Ok(())
    }
}

/// Speech sink that keeps every line
#[derive(Debug, Default)]
pub(crate) struct RecordingSpeech {
    lines: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[async_trait]
impl SpeechOutputPort for RecordingSpeech {
    async fn say(&self, sentence: &str) -> Result<(), ApplicationError> {
        self.lines.lock().push(sentence.to_string());
        Ok(())
    }
}
