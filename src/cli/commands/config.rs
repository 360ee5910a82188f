//! Config command implementation.
//!
//! The `fitform config` command shows the resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, FitformConfig};
use crate::error::{FitformError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    args: ConfigArgs,
    config: FitformConfig,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs, config: FitformConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(&self.config)
                .map_err(|e| FitformError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let paths = ConfigPaths::discover(&self.project_root);
        let existing = paths.all_existing();
        if existing.is_empty() {
            ui.message("# No config files found, showing defaults");
        } else {
            for path in &existing {
                ui.message(&format!("# {}", path.display()));
            }
        }

        let yaml = serde_yaml::to_string(&self.config).map_err(|e| FitformError::Other(e.into()))?;
        ui.output(&yaml);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_merged_config;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), ConfigArgs::default(), FitformConfig::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No config files found"));
        assert!(ui.outputs()[0].contains("include_builtin: true"));
    }

    #[test]
    fn yaml_output_lists_source_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".fitform");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "settings:\n  default_output: quiet\n").unwrap();
        let config = load_merged_config(temp.path()).unwrap();

        let cmd = ConfigCommand::new(temp.path(), ConfigArgs::default(), config);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages()[0].ends_with("config.yml"));
        assert!(ui.outputs()[0].contains("default_output: quiet"));
    }

    #[test]
    fn json_output_is_only_json() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), ConfigArgs { json: true }, FitformConfig::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().is_empty());
        let json: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(json["settings"]["default_output"], "normal");
        assert_eq!(json["meals"]["include_builtin"], true);
    }
}
