//! Aggregated spec output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TplspecError};
use crate::template::Template;

/// Merged templates keyed by template ID.
///
/// Serializes as a plain JSON object. Keys are ordered, so identical
/// inputs produce identical files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResult {
    templates: BTreeMap<String, Template>,
}

impl AggregatedResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a merged template.
    pub fn insert(&mut self, template_id: impl Into<String>, template: Template) {
        self.templates.insert(template_id.into(), template);
    }

    /// Look up a merged template.
    pub fn get(&self, template_id: &str) -> Option<&Template> {
        self.templates.get(template_id)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates were aggregated.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Total step entries across all templates.
    pub fn step_count(&self) -> usize {
        self.templates.values().map(|t| t.steps.len()).sum()
    }

    /// Template IDs in output order.
    pub fn template_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Serialize to the output JSON document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TplspecError::Other(e.into()))
    }
}

/// Write the aggregated spec to `path`.
///
/// The document is serialized completely before the file is created, and
/// the parent directory is created if missing.
pub fn write_output(path: &Path, result: &AggregatedResult) -> Result<()> {
    let write_err = |message: String| TplspecError::OutputWrite {
        path: path.to_path_buf(),
        message,
    };

    let mut json = result.to_json()?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
    }

    fs::write(path, json).map_err(|e| write_err(e.to_string()))?;
    tracing::debug!("Wrote {} templates to {}", result.len(), path.display());
    Ok(())
}
