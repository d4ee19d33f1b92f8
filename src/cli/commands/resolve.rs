//! Resolve command implementation.
//!
//! The `tplspec resolve` command shows what step references pin to in the
//! current registry, without touching any template. With `--json` the
//! metadata document is written to stdout regardless of output mode.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::load_build_config;
use crate::error::{Result, TplspecError};
use crate::registry::{source_for, RegistrySnapshot, StepMetadata, StepReference};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn report(
        &self,
        snapshot: &RegistrySnapshot,
        ui: &mut dyn UserInterface,
        out: &mut dyn Write,
    ) -> Result<bool> {
        let mut all_resolved = true;
        let mut resolved: BTreeMap<&str, &StepMetadata> = BTreeMap::new();

        for raw in &self.args.references {
            let reference = StepReference::parse(raw);
            let outcome = snapshot
                .effective_version(&reference)
                .and_then(|version| Ok((version, snapshot.resolve(&reference)?)));

            match outcome {
                Ok((version, info)) => {
                    if self.args.json {
                        resolved.insert(raw.as_str(), info);
                    } else {
                        ui.message(&format!("{} -> {}@{}", raw, reference.id, version));
                    }
                }
                Err(e) => {
                    all_resolved = false;
                    ui.error(&e.to_string());
                }
            }
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved)
                .map_err(|e| TplspecError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        }

        Ok(all_resolved)
    }

    /// Execute, writing the `--json` document to `out`.
    pub fn execute_to(
        &self,
        ui: &mut dyn UserInterface,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let config = load_build_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.registry.overrides(),
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

        if self.report(&snapshot, ui, out)? {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_to(ui, &mut std::io::stdout())
    }
}
