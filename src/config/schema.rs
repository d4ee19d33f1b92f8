//! Build configuration schema.
//!
//! Example `tplspec.yml`:
//!
//! ```yaml
//! collection_dir: ./templates
//! template_file_name: template.yml
//! output_dir: ./_tmp
//! output_file_name: template-spec.json
//! registry_url: https://bitrise-steplib-collection.s3.amazonaws.com/spec.json
//! timeout: 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default step registry location.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://bitrise-steplib-collection.s3.amazonaws.com/spec.json";

/// Settings for one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding one subdirectory per template.
    #[serde(default = "default_collection_dir")]
    pub collection_dir: PathBuf,

    /// Template document name inside each template directory.
    #[serde(default = "default_template_file_name")]
    pub template_file_name: String,

    /// Directory the aggregated spec is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the aggregated spec.
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Registry document URL.
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// Local registry document. Takes precedence over `registry_url`.
    #[serde(default)]
    pub registry_file: Option<PathBuf>,

    /// Registry request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_collection_dir() -> PathBuf {
    PathBuf::from("./templates")
}

fn default_template_file_name() -> String {
    "template.yml".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./_tmp")
}

fn default_output_file_name() -> String {
    "template-spec.json".to_string()
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            collection_dir: default_collection_dir(),
            template_file_name: default_template_file_name(),
            output_dir: default_output_dir(),
            output_file_name: default_output_file_name(),
            registry_url: default_registry_url(),
            registry_file: None,
            timeout: default_timeout(),
        }
    }
}

impl BuildConfig {
    /// Full path of the aggregated spec.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }

    /// Registry request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply(&mut self, overrides: &BuildOverrides) {
        if let Some(dir) = &overrides.collection_dir {
            self.collection_dir = dir.clone();
        }
        if let Some(output) = &overrides.output {
            if let Some(parent) = output.parent() {
                self.output_dir = parent.to_path_buf();
            }
            if let Some(name) = output.file_name() {
                self.output_file_name = name.to_string_lossy().into_owned();
            }
        }
        if let Some(url) = &overrides.registry_url {
            self.registry_url = url.clone();
            self.registry_file = None;
        }
        if let Some(file) = &overrides.registry_file {
            self.registry_file = Some(file.clone());
        }
        if let Some(timeout) = overrides.timeout {
            self.timeout = timeout;
        }
    }

    /// Make relative paths relative to `root`.
    pub fn resolve_paths(&mut self, root: &Path) {
        fn anchor(root: &Path, path: &mut PathBuf) {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }

        anchor(root, &mut self.collection_dir);
        anchor(root, &mut self.output_dir);
        if let Some(file) = self.registry_file.as_mut() {
            anchor(root, file);
        }
    }
}

/// Command-line overrides for [`BuildConfig`].
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub collection_dir: Option<PathBuf>,
    /// Full output file path.
    pub output: Option<PathBuf>,
    pub registry_url: Option<String>,
    pub registry_file: Option<PathBuf>,
    pub timeout: Option<u64>,
}
