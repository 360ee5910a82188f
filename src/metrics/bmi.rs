//! Body mass index.

use std::fmt;

use serde::Serialize;

/// BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiClass {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl BmiClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI from weight in kilograms and height in centimetres, rounded to one decimal.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let bmi = weight_kg / height_cm.powi(2) * 10_000.0;
    (bmi * 10.0).round() / 10.0
}

/// Classify a BMI value.
///
/// Bounds: `<= 18.5`, `<= 24.99`, `<= 29.99`, `>= 30`. Values in none of
/// the bands (NaN, or between 29.99 and 30) are `Unknown`.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    if bmi <= 18.5 {
        BmiClass::Underweight
    } else if bmi <= 24.99 {
        BmiClass::NormalWeight
    } else if bmi <= 29.99 {
        BmiClass::Overweight
    } else if bmi >= 30.0 {
        BmiClass::Obese
    } else {
        BmiClass::Unknown
    }
}
