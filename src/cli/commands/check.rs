//! Check command implementation.
//!
//! The `tplspec check` command validates every template in the collection
//! without contacting the registry. Unlike `build`, it reports all failing
//! templates instead of stopping at the first.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_build_config, BuildOverrides};
use crate::error::Result;
use crate::template::{validate, DirectorySource, TemplateSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let overrides = BuildOverrides {
            collection_dir: self.args.collection.clone(),
            ..Default::default()
        };
        let config =
            load_build_config(&self.project_root, self.config_path.as_deref(), &overrides)?;

        let source = DirectorySource::new(&config.collection_dir, &config.template_file_name);
        let ids = source.template_ids()?;

        let mut failures = 0;
        for id in &ids {
            let outcome = source
                .load(id)
                .and_then(|template| validate(id, template.as_ref()));

            match outcome {
                Ok(()) => {
                    if ui.output_mode().shows_detail() {
                        ui.message(&format!("ok  {}", id));
                    }
                }
                Err(e) => {
                    failures += 1;
                    ui.error(&e.to_string());
                }
            }
        }

        if failures > 0 {
            ui.error(&format!("{} of {} templates failed", failures, ids.len()));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!("{} templates valid", ids.len()));
        Ok(CommandResult::success())
    }
}
