//! Command-line interface for fitform.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs, FieldArgs, MealsArgs, ReportArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
