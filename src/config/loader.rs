//! Configuration file discovery and loading.
//!
//! Layering (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`tplspec.yml` in the project root), or an explicit file
//! 3. Command-line overrides

use crate::config::schema::{BuildConfig, BuildOverrides};
use crate::error::{Result, TplspecError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = "tplspec.yml";

/// Find the project config file, if present.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into a BuildConfig.
///
/// An empty file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BuildConfig> {
    let parsed: Option<BuildConfig> =
        serde_yaml::from_str(content).map_err(|e| TplspecError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(parsed.unwrap_or_default())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<BuildConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TplspecError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TplspecError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Load the effective build config for a project.
///
/// `explicit` must exist when given; otherwise the project config is
/// optional. A relative `explicit` path, like every relative path inside
/// the config, is anchored at `project_root`.
pub fn load_build_config(
    project_root: &Path,
    explicit: Option<&Path>,
    overrides: &BuildOverrides,
) -> Result<BuildConfig> {
    let mut config = match explicit {
        Some(path) => load_config_file(&project_root.join(path))?,
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Using config {}", path.display());
                load_config_file(&path)?
            }
            None => BuildConfig::default(),
        },
    };

    config.apply(overrides);
    config.resolve_paths(project_root);
    Ok(config)
}
