//! tplspec - Pin step references in catalog templates to registry versions.
//!
//! tplspec reads a collection of project templates, resolves every step
//! reference they list (`id` or `id@version`) against a step registry
//! snapshot, and writes a single JSON template spec with the resolved
//! metadata inlined.
//!
//! # Modules
//!
//! - [`aggregate`] - Build driver and output writing
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Build configuration loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Step references, registry snapshots, and fetching
//! - [`template`] - Template schema, loading, validation, and merging
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use tplspec::registry::{RegistrySnapshot, StepReference};
//!
//! let snapshot = RegistrySnapshot::from_json(
//!     r#"{"steps": {"script": {
//!         "latest_version_number": "1.1",
//!         "versions": {"1.0": {}, "1.1": {}}
//!     }}}"#,
//!     "inline",
//! )
//! .unwrap();
//!
//! let reference = StepReference::parse("script");
//! assert_eq!(snapshot.effective_version(&reference).unwrap(), "1.1");
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod template;
pub mod ui;

pub use error::{Result, TplspecError};
