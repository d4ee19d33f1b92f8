//! Error types for tplspec operations.
//!
//! This module defines [`TplspecError`], the error type returned by every
//! core operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal to the run; nothing in the core recovers locally
//! - Errors carry the identifiers an operator needs to fix the input
//!   (step ID, version, template ID, field name, path)
//! - Only `main` turns an error into a process exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tplspec operations.
#[derive(Debug, Error)]
pub enum TplspecError {
    /// The registry snapshot could not be fetched or decoded.
    #[error("Failed to fetch step registry from {source_name}: {message}")]
    RegistryFetch {
        source_name: String,
        message: String,
    },

    /// A template document could not be read or decoded.
    #[error("Failed to load template '{template}': {message}")]
    TemplateLoad { template: String, message: String },

    /// A template is missing a required field.
    #[error("Invalid template '{template}': {field} {reason}")]
    Validation {
        template: String,
        field: String,
        reason: String,
    },

    /// No step with this ID exists in the registry.
    #[error("No step found with id: {id}")]
    UnknownStepId { id: String },

    /// The step exists but the requested (or recorded latest) version does not.
    #[error("No version ({version}) found for step id: {id}")]
    UnknownStepVersion { id: String, version: String },

    /// A resolution failure raised while merging a specific template.
    #[error("Template '{template}': {source}")]
    InTemplate {
        template: String,
        #[source]
        source: Box<TplspecError>,
    },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The aggregated output could not be written.
    #[error("Failed to write output to {path}: {message}")]
    OutputWrite { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TplspecError {
    /// Wrap this error with the ID of the template being processed.
    pub fn in_template(self, template: impl Into<String>) -> Self {
        TplspecError::InTemplate {
            template: template.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any template context.
    pub fn root(&self) -> &TplspecError {
        match self {
            TplspecError::InTemplate { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for tplspec operations.
pub type Result<T> = std::result::Result<T, TplspecError>;
