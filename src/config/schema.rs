//! Configuration schema definitions for fitform.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};

use crate::meals::{Meal, MealCatalog};

/// Root configuration structure for `.fitform/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitformConfig {
    /// Global settings
    pub settings: Settings,

    /// Meal catalog settings
    pub meals: MealsConfig,
}

impl FitformConfig {
    /// Catalog suggestions are drawn from.
    pub fn meal_catalog(&self) -> MealCatalog {
        let mut catalog = if self.meals.include_builtin {
            MealCatalog::builtin()
        } else {
            MealCatalog::default()
        };
        for meal in &self.meals.custom {
            catalog.push(meal.clone());
        }
        catalog
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Never prompt or wait for acknowledgement
    #[serde(skip_serializing_if = "is_false")]
    pub non_interactive: bool,
}

/// Output mode as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// Meal catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealsConfig {
    /// Keep the built-in meals in the catalog
    pub include_builtin: bool,

    /// Additional meals
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<Meal>,
}

impl Default for MealsConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            custom: Vec::new(),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
