//! Aggregation orchestration.
//!
//! For each template, in enumeration order: load, validate, merge, insert.
//! The first failure anywhere aborts the run and nothing is produced.

use std::path::PathBuf;

use crate::aggregate::output::{write_output, AggregatedResult};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::registry::RegistrySnapshot;
use crate::template::{merge, validate, Template, TemplateSource};

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Where the spec was written.
    pub output_path: PathBuf,
    /// Number of templates aggregated.
    pub templates: usize,
    /// Number of step entries resolved.
    pub steps: usize,
}

/// Drives a full aggregation run.
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: BuildConfig,
}

impl Aggregator {
    /// Create an aggregator for the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Aggregate the given templates against a snapshot.
    ///
    /// `load` returns `Ok(None)` for an empty template document.
    pub fn run<F>(
        &self,
        template_ids: &[String],
        mut load: F,
        snapshot: &RegistrySnapshot,
    ) -> Result<AggregatedResult>
    where
        F: FnMut(&str) -> Result<Option<Template>>,
    {
        let mut result = AggregatedResult::new();

        for id in template_ids {
            let template = load(id)?;
            validate(id, template.as_ref())?;

            // validate rejects a missing template
            let Some(mut template) = template else {
                continue;
            };

            merge(&mut template, snapshot).map_err(|e| e.in_template(id.as_str()))?;
            tracing::info!("<- {}", id);
            result.insert(id.as_str(), template);
        }

        Ok(result)
    }

    /// Aggregate every template from `templates` and write the spec to the
    /// configured output path.
    ///
    /// The output file is only written when every template succeeded.
    pub fn build(
        &self,
        snapshot: &RegistrySnapshot,
        templates: &dyn TemplateSource,
    ) -> Result<BuildReport> {
        for id in snapshot.dangling_latest() {
            tracing::debug!("Step {} has a latest version that is not listed", id);
        }

        let ids = templates.template_ids()?;
        tracing::debug!("Found {} templates", ids.len());

        let result = self.run(&ids, |id| templates.load(id), snapshot)?;

        let output_path = self.config.output_path();
        write_output(&output_path, &result)?;

        Ok(BuildReport {
            output_path,
            templates: result.len(),
            steps: result.step_count(),
        })
    }
}
