//! Build configuration for tplspec.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use tplspec::config::{load_build_config, BuildOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("tplspec.yml"), "output_file_name: spec.json").unwrap();
//!
//! let config = load_build_config(temp.path(), None, &BuildOverrides::default()).unwrap();
//! assert!(config.output_path().ends_with("spec.json"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_build_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{BuildConfig, BuildOverrides, DEFAULT_REGISTRY_URL};
