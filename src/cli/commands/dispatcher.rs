//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_or_default, validate, FitformConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load config from this file instead of discovering it.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the configuration commands run with.
    pub fn load_config(&self) -> Result<FitformConfig> {
        let config = load_config_or_default(&self.project_root, self.config_override.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        cli: &Cli,
        config: &FitformConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", cli.command);
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Report(args) => {
                let cmd = super::report::ReportCommand::new(args.clone(), config.clone());
                cmd.execute(ui)
            }
            Commands::Meals(args) => {
                let cmd = super::meals::MealsCommand::new(args.clone(), config.meal_catalog());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.project_root,
                    args.clone(),
                    config.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
