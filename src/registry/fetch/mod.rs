//! Registry snapshot sources.
//!
//! A [`RegistrySource`] produces the snapshot for a run. Two sources exist:
//! [`HttpRegistry`] downloads the registry document, [`FileRegistry`] reads a
//! local copy of it.

pub mod http;

pub use http::HttpFetcher;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::BuildConfig;
use crate::error::{Result, TplspecError};
use crate::registry::snapshot::RegistrySnapshot;

/// Something that can produce a registry snapshot.
pub trait RegistrySource {
    /// Human-readable location of the registry (URL or path).
    fn describe(&self) -> String;

    /// Fetch and decode the snapshot.
    fn fetch(&self) -> Result<RegistrySnapshot>;
}

/// Pick the registry source a config asks for.
///
/// A configured `registry_file` takes precedence over `registry_url`.
pub fn source_for(config: &BuildConfig) -> Result<Box<dyn RegistrySource>> {
    match &config.registry_file {
        Some(path) => Ok(Box::new(FileRegistry::new(path))),
        None => Ok(Box::new(HttpRegistry::new(
            config.registry_url.clone(),
            config.timeout(),
        )?)),
    }
}

/// Registry downloaded over HTTP.
pub struct HttpRegistry {
    url: String,
    fetcher: HttpFetcher,
}

impl HttpRegistry {
    /// Create a source for the given URL.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            fetcher: HttpFetcher::with_timeout(timeout)?,
        })
    }

    /// The registry URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RegistrySource for HttpRegistry {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<RegistrySnapshot> {
        tracing::debug!("Fetching registry from {}", self.url);
        let content = self
            .fetcher
            .fetch(&self.url)
            .map_err(|e| TplspecError::RegistryFetch {
                source_name: self.url.clone(),
                message: format!("{:#}", e),
            })?;
        RegistrySnapshot::from_json(&content, &self.url)
    }
}

/// Registry read from a local JSON file.
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The registry file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistrySource for FileRegistry {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<RegistrySnapshot> {
        tracing::debug!("Reading registry from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|e| TplspecError::RegistryFetch {
            source_name: self.describe(),
            message: e.to_string(),
        })?;
        RegistrySnapshot::from_json(&content, &self.describe())
    }
}
