//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::FitformConfig;
use crate::error::{FitformError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding configuration inside a project.
pub const CONFIG_DIR: &str = ".fitform";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.fitform/config.yml`)
/// 2. Local overrides (`.fitform/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .fitform/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .fitform/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config file exists.
    pub fn has_any(&self) -> bool {
        self.project.is_some() || self.project_local.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FitformError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FitformError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FitformConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into FitformConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FitformConfig> {
    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(FitformConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| FitformError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| FitformError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // A file holding only comments parses as null.
    if value.is_null() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    Ok(value)
}

/// Load and merge the project's config files.
///
/// # Errors
///
/// Returns `ConfigNotFound` if neither file exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<FitformConfig> {
    let paths = ConfigPaths::discover(project_root);
    let project_path = project_root.join(CONFIG_DIR).join("config.yml");

    if !paths.has_any() {
        return Err(FitformError::ConfigNotFound { path: project_path });
    }

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| FitformError::ConfigParseError {
        path: project_path,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges the project's config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<FitformConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}

/// Like [`load_config`], but a project without config files gets defaults.
///
/// An explicit `config_override` that does not exist is still an error.
pub fn load_config_or_default(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<FitformConfig> {
    match load_config(project_root, config_override) {
        Err(FitformError::ConfigNotFound { .. }) if config_override.is_none() => {
            tracing::debug!("No config in {}, using defaults", project_root.display());
            Ok(FitformConfig::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputMode;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_both_files() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "config.yml", "{}");
        write_config(&temp, "config.local.yml", "{}");

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_some());
        assert!(paths.project_local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn missing_config_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_merged_config(temp.path()).unwrap_err();
        assert!(matches!(err, FitformError::ConfigNotFound { .. }));
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            "config.yml",
            "settings:\n  default_output: verbose\n  non_interactive: true\n",
        );
        write_config(&temp, "config.local.yml", "settings:\n  default_output: silent\n");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Silent);
        assert!(config.settings.non_interactive);
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "config.yml", "");
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, FitformConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "config.yml", "settings: [unclosed");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, FitformError::ConfigParseError { .. }));
    }

    #[test]
    fn override_path_skips_discovery() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "config.yml", "settings:\n  default_output: verbose\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "settings:\n  default_output: quiet\n").unwrap();

        let config = load_config(temp.path(), Some(other.as_path())).unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
    }

    #[test]
    fn or_default_tolerates_missing_project_config() {
        let temp = TempDir::new().unwrap();
        let config = load_config_or_default(temp.path(), None).unwrap();
        assert_eq!(config, FitformConfig::default());
    }

    #[test]
    fn or_default_still_rejects_missing_override() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        assert!(load_config_or_default(temp.path(), Some(missing.as_path())).is_err());
    }
}
