//! Build command implementation.
//!
//! The `tplspec build` command fetches the registry, merges every template
//! in the collection, and writes the template spec.

use std::path::{Path, PathBuf};

use crate::aggregate::Aggregator;
use crate::cli::args::BuildArgs;
use crate::config::load_build_config;
use crate::error::Result;
use crate::registry::source_for;
use crate::template::DirectorySource;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_build_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.overrides(),
        )?;

        let registry = source_for(&config)?;
        let mut spinner =
            ui.start_spinner(&format!("Fetching step registry from {}", registry.describe()));
        let snapshot = match registry.fetch() {
            Ok(snapshot) => {
                spinner.finish_success(&format!("Loaded {} steps", snapshot.len()));
                snapshot
            }
            Err(e) => {
                spinner.finish_error("Registry fetch failed");
                return Err(e);
            }
        };

        if ui.output_mode().shows_detail() {
            for id in snapshot.dangling_latest() {
                ui.warning(&format!("Step {} lists a latest version it does not have", id));
            }
        }

        let templates =
            DirectorySource::new(&config.collection_dir, &config.template_file_name);
        let aggregator = Aggregator::new(config);
        let report = aggregator.build(&snapshot, &templates)?;

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Collection: {}", templates.root().display()));
        }
        ui.success(&format!(
            "Wrote {} templates ({} steps) to {}",
            report.templates,
            report.steps,
            report.output_path.display()
        ));

        Ok(CommandResult::success())
    }
}
