//! fitform - Body-metrics form validation, reports and meal suggestions.
//!
//! The core of the crate is the pre-submission check in [`form`]: age,
//! weight and height must all be non-empty before a form may be submitted,
//! otherwise the user is alerted with the list of missing fields.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`form`] - Form fields, validation and submission gating
//! - [`meals`] - Meal catalog and suggestions
//! - [`metrics`] - BMI and calorie calculations
//! - [`ui`] - Interactive prompts, alerts and terminal output
//!
//! # Example
//!
//! ```
//! use fitform::form::{validate, FormValues};
//! use fitform::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! assert!(validate(&FormValues::new("0", "0", "0"), &mut ui));
//! assert!(ui.alerts().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod meals;
pub mod metrics;
pub mod ui;

pub use error::{FitformError, Result};
