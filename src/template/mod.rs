//! Catalog templates.
//!
//! - Document schema in [`schema`]
//! - Collection discovery and loading in [`loader`]
//! - Structural validation in [`validator`]
//! - Step metadata merging in [`merger`]

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{DirectorySource, TemplateSource};
pub use merger::merge;
pub use schema::{Template, TemplateStepEntry};
pub use validator::validate;
