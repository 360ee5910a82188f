//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::form::FormValues;
use crate::metrics::{ActivityLevel, Gender};

/// fitform - Body-metrics form checks, BMI reports and meal suggestions.
#[derive(Debug, Parser)]
#[command(name = "fitform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .fitform/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt or wait for acknowledgement
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that age, weight and height are filled in
    Check(CheckArgs),

    /// Submit the form and show BMI and daily calories
    Report(ReportArgs),

    /// Suggest meals within a daily calorie budget
    Meals(MealsArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// The three required form fields.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FieldArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in centimetres
    #[arg(long)]
    pub height: Option<String>,
}

impl FieldArgs {
    /// Form values, with fields not given on the command line left empty.
    pub fn to_values(&self) -> FormValues {
        FormValues::from_options(
            self.age.as_deref(),
            self.weight.as_deref(),
            self.height.as_deref(),
        )
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Gender used for the calorie formula [default: male]
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Physical activity level [default: sedentary]
    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    /// Body fat percentage (switches to the body-fat calorie formula)
    #[arg(long)]
    pub bodyfat: Option<String>,

    /// Ask for fields, gender and activity not given on the command line
    #[arg(long)]
    pub prompt: bool,

    /// Also suggest meals within the computed daily calories
    #[arg(long)]
    pub meals: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `meals` command.
#[derive(Debug, Clone, clap::Args)]
pub struct MealsArgs {
    /// Daily calorie budget; each meal gets at most a third
    #[arg(long)]
    pub max_kcal: f64,

    /// Seed for reproducible suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
