//! Configuration loading, parsing, and validation for fitform.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use fitform::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".fitform");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "settings:\n  default_output: quiet\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert!(config.meals.include_builtin);
//! ```
//!
//! # Configuration File Locations
//!
//! Merged in this order:
//! 1. Project config (`.fitform/config.yml`)
//! 2. Local overrides (`.fitform/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{FitformConfig, MealsConfig, OutputMode, Settings};

pub use loader::{
    load_config, load_config_file, load_config_or_default, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
