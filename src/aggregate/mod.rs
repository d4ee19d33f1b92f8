//! Template aggregation.
//!
//! [`Aggregator`] walks a template collection against a registry snapshot,
//! validating and merging each template, and writes the combined spec.
//!
//! # Example
//!
//! ```
//! use tplspec::aggregate::Aggregator;
//! use tplspec::config::BuildConfig;
//! use tplspec::registry::RegistrySnapshot;
//! use tplspec::template::Template;
//!
//! let snapshot = RegistrySnapshot::from_json(
//!     r#"{"steps": {"script": {"latest_version_number": "1.0", "versions": {"1.0": {}}}}}"#,
//!     "inline",
//! ).unwrap();
//!
//! let aggregator = Aggregator::new(BuildConfig::default());
//! let result = aggregator
//!     .run(
//!         &["web".to_string()],
//!         |_| Template::from_yaml("title: Web\nconfig: x\nsteps:\n  script:\n")
//!             .map_err(|e| anyhow::anyhow!(e).into()),
//!         &snapshot,
//!     )
//!     .unwrap();
//!
//! assert!(result.get("web").unwrap().is_fully_resolved());
//! ```

pub mod driver;
pub mod output;

pub use driver::{Aggregator, BuildReport};
pub use output::{write_output, AggregatedResult};
