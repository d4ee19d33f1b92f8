//! Step registry for tplspec.
//!
//! This module handles the registry snapshot and step resolution:
//! - Snapshot types in [`snapshot`]
//! - Reference token parsing in [`reference`]
//! - Version resolution in [`resolver`]
//! - Snapshot sources (HTTP, local file) in [`fetch`]
//!
//! # Example
//!
//! ```
//! use tplspec::registry::RegistrySnapshot;
//!
//! let doc = r#"{"steps": {"script": {
//!     "latest_version_number": "1.1",
//!     "versions": {"1.0": {"title": "old"}, "1.1": {"title": "new"}}
//! }}}"#;
//! let snapshot = RegistrySnapshot::from_json(doc, "inline").unwrap();
//!
//! assert_eq!(snapshot.resolve_raw("script").unwrap().as_value()["title"], "new");
//! assert_eq!(snapshot.resolve_raw("script@1.0").unwrap().as_value()["title"], "old");
//! ```

pub mod fetch;
pub mod reference;
pub mod resolver;
pub mod snapshot;

// Re-exports
pub use fetch::{source_for, FileRegistry, HttpFetcher, HttpRegistry, RegistrySource};
pub use reference::StepReference;
pub use snapshot::{RegistrySnapshot, StepMetadata, StepVersionEntry};
