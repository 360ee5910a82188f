//! Body metrics computed from a submitted form.
//!
//! - [`bmi`] - body mass index and its classification
//! - [`calories`] - daily calorie needs (Mifflin-St Jeor, Katch-McArdle)
//! - [`labels`] - gender and activity level inputs
//! - [`report`] - parsing a form into a [`BodyProfile`] and building a [`MetricsReport`]
//!
//! # Example
//!
//! ```
//! use fitform::metrics::{calculate_bmi, classify_bmi, BmiClass};
//!
//! let bmi = calculate_bmi(70.0, 180.0);
//! assert_eq!(bmi, 21.6);
//! assert_eq!(classify_bmi(bmi), BmiClass::NormalWeight);
//! ```

pub mod bmi;
pub mod calories;
pub mod labels;
pub mod report;

pub use bmi::{calculate_bmi, classify_bmi, BmiClass};
pub use calories::{calculate_calories, calculate_calories_bfat};
pub use labels::{activity_label, gender_label, ActivityLevel, Gender};
pub use report::{BodyProfile, CalorieFormula, MetricsReport};
