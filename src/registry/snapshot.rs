//! Registry snapshot definitions.
//!
//! A snapshot is the decoded step registry document:
//!
//! ```json
//! { "steps": { "<id>": { "latest_version_number": "2.0", "versions": { "2.0": { ... } } } } }
//! ```
//!
//! It is built once per run and only read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, TplspecError};

/// Step metadata carried verbatim from the registry into the output.
///
/// The fields are defined by the registry and never interpreted here, so
/// registry schema additions pass straight through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepMetadata(serde_json::Value);

impl StepMetadata {
    /// Wrap a raw metadata value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the raw metadata value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume into the raw metadata value.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// All known versions of a single step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepVersionEntry {
    /// Version an unqualified reference resolves to.
    #[serde(rename = "latest_version_number", default)]
    pub latest_version: String,

    /// Metadata keyed by version string.
    #[serde(default)]
    pub versions: BTreeMap<String, StepMetadata>,
}

impl StepVersionEntry {
    /// Whether the recorded latest version points at a known version.
    ///
    /// An empty latest version is treated as not set.
    pub fn latest_is_dangling(&self) -> bool {
        !self.latest_version.is_empty() && !self.versions.contains_key(&self.latest_version)
    }
}

/// In-memory index of every known step and its versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Step entries keyed by step ID.
    #[serde(default)]
    pub steps: BTreeMap<String, StepVersionEntry>,
}

impl RegistrySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a snapshot from the registry's JSON document.
    ///
    /// `source_name` identifies the document in error messages.
    pub fn from_json(content: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TplspecError::RegistryFetch {
            source_name: source_name.to_string(),
            message: format!("invalid registry document: {}", e),
        })
    }

    /// Add or replace a step entry.
    pub fn insert(&mut self, id: impl Into<String>, entry: StepVersionEntry) {
        self.steps.insert(id.into(), entry);
    }

    /// Look up a step entry by ID.
    pub fn get(&self, id: &str) -> Option<&StepVersionEntry> {
        self.steps.get(id)
    }

    /// Number of known steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the snapshot holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// IDs of steps whose latest version is not among their versions.
    pub fn dangling_latest(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|(_, entry)| entry.latest_is_dangling())
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
