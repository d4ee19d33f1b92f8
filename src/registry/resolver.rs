//! Version resolution against a registry snapshot.
//!
//! Resolution order:
//! 1. Look up the step ID
//! 2. Explicit version wins
//! 3. Otherwise the snapshot's latest version for that step
//!
//! A latest version that is not itself a known version is an error; no other
//! version is picked in its place.

use crate::error::{Result, TplspecError};
use crate::registry::reference::StepReference;
use crate::registry::snapshot::{RegistrySnapshot, StepMetadata};

impl RegistrySnapshot {
    /// The version string a reference pins to, without fetching metadata.
    pub fn effective_version<'a>(&'a self, reference: &'a StepReference) -> Result<&'a str> {
        let entry = self
            .get(&reference.id)
            .ok_or_else(|| TplspecError::UnknownStepId {
                id: reference.id.clone(),
            })?;

        let version = reference
            .version
            .as_deref()
            .unwrap_or(entry.latest_version.as_str());

        if entry.versions.contains_key(version) {
            Ok(version)
        } else {
            Err(TplspecError::UnknownStepVersion {
                id: reference.id.clone(),
                version: version.to_string(),
            })
        }
    }

    /// Resolve a reference to its step metadata.
    pub fn resolve(&self, reference: &StepReference) -> Result<&StepMetadata> {
        let version = self.effective_version(reference)?;
        tracing::debug!("Resolved {} to version {}", reference, version);

        // effective_version only returns keys present in `versions`.
        self.get(&reference.id)
            .and_then(|entry| entry.versions.get(version))
            .ok_or_else(|| TplspecError::UnknownStepVersion {
                id: reference.id.clone(),
                version: version.to_string(),
            })
    }

    /// Parse and resolve a raw reference token.
    pub fn resolve_raw(&self, raw: &str) -> Result<&StepMetadata> {
        self.resolve(&StepReference::parse(raw))
    }
}
