//! Recognized utterance handed to the plugin's handler

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A matched intent: the raw input plus the keyword values found per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name, e.g. `NWSWeatherIntent`
    pub name: String,
    /// Text as spoken or typed
    pub input: String,
    /// Slot name to the keyword values matched for it
    #[serde(default)]
    pub matches: BTreeMap<String, Vec<String>>,
}

impl Intent {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            matches: BTreeMap::new(),
        }
    }

    /// Record a keyword match for a slot
    #[must_use]
    pub fn with_match(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.matches.entry(slot.into()).or_default().push(value.into());
        self
    }

    /// Values matched for a slot (empty if none)
    #[must_use]
    pub fn matches_for(&self, slot: &str) -> &[String] {
        self.matches.get(slot).map(Vec::as_slice).unwrap_or_default()
    }
}
