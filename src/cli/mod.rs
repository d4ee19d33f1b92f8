//! Command-line interface for tplspec.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, CheckArgs, Cli, Commands, CompletionsArgs, RegistryArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
