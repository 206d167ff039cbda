//! Nested profile document addressed by key paths

use domain::ProfilePath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ProfileStoreError;

/// A tree of tables with scalar or array leaves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDocument {
    root: Map<String, Value>,
}

impl ProfileDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at a path; `None` when any segment is missing or not a table
    #[must_use]
    pub fn get(&self, path: &ProfilePath) -> Option<&Value> {
        let (last, parents) = path.segments().split_last()?;
        let mut table = &self.root;
        for segment in parents {
            table = table.get(segment)?.as_object()?;
        }
        table.get(last)
    }

    /// Store a value, creating missing tables along the path
    pub fn set(&mut self, path: &ProfilePath, value: Value) -> Result<(), ProfileStoreError> {
        if value.is_null() {
            return Err(ProfileStoreError::NullValue(path.to_string()));
        }
        let (last, parents) = path
            .segments()
            .split_last()
            .ok_or(ProfileStoreError::EmptyPath)?;

        let mut table = &mut self.root;
        for segment in parents {
            let entry = table
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            table = entry
                .as_object_mut()
                .ok_or_else(|| ProfileStoreError::NotATable(segment.clone()))?;
        }
        table.insert(last.clone(), value);
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
