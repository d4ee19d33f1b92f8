//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::BuildOverrides;

/// tplspec - Pin step references in catalog templates to registry versions.
#[derive(Debug, Parser)]
#[command(name = "tplspec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file, relative to the project root (overrides default tplspec.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the template spec (default if no command specified)
    Build(BuildArgs),

    /// Validate templates without contacting the registry
    Check(CheckArgs),

    /// Show which registry version step references resolve to
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where to read the registry from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RegistryArgs {
    /// Registry document URL
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Read the registry from a local JSON file instead of the URL
    #[arg(long, value_name = "PATH", conflicts_with = "registry_url")]
    pub registry_file: Option<PathBuf>,

    /// Registry request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Template collection directory
    #[arg(long, value_name = "DIR")]
    pub collection: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

impl BuildArgs {
    /// Config overrides from these arguments.
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            collection_dir: self.collection.clone(),
            output: self.output.clone(),
            ..self.registry.overrides()
        }
    }
}

impl RegistryArgs {
    /// Config overrides from these arguments.
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            registry_url: self.registry_url.clone(),
            registry_file: self.registry_file.clone(),
            timeout: self.timeout,
            ..Default::default()
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Template collection directory
    #[arg(long, value_name = "DIR")]
    pub collection: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Step references (`id` or `id@version`)
    #[arg(required = true, value_name = "REF")]
    pub references: Vec<String>,

    /// Print resolved metadata as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::parse_from(["tplspec"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn build_flags_become_overrides() {
        let cli = Cli::parse_from([
            "tplspec",
            "build",
            "--collection",
            "tpl",
            "--output",
            "out/spec.json",
            "--registry-file",
            "spec.json",
            "--timeout",
            "5",
        ]);
        let Some(Commands::Build(args)) = cli.command else {
            panic!("Expected Build command");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.collection_dir, Some(PathBuf::from("tpl")));
        assert_eq!(overrides.output, Some(PathBuf::from("out/spec.json")));
        assert_eq!(overrides.registry_file, Some(PathBuf::from("spec.json")));
        assert_eq!(overrides.timeout, Some(5));
    }

    #[test]
    fn registry_url_and_file_conflict() {
        let result = Cli::try_parse_from([
            "tplspec",
            "build",
            "--registry-url",
            "https://example.com",
            "--registry-file",
            "spec.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn resolve_requires_reference() {
        assert!(Cli::try_parse_from(["tplspec", "resolve"]).is_err());
        let cli = Cli::parse_from(["tplspec", "resolve", "script@1.0", "git-clone", "--json"]);
        let Some(Commands::Resolve(args)) = cli.command else {
            panic!("Expected Resolve command");
        };
        assert_eq!(args.references, vec!["script@1.0", "git-clone"]);
        assert!(args.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tplspec", "check", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
