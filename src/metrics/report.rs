//! Typed body profile and the computed metrics report.

use serde::Serialize;

use crate::error::{FitformError, Result};
use crate::form::{FieldId, FormValues};

use super::{
    calculate_bmi, calculate_calories, calculate_calories_bfat, classify_bmi, ActivityLevel,
    BmiClass, Gender,
};

/// Submitted form data with numeric fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyProfile {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
}

impl BodyProfile {
    /// Parse a validated form.
    ///
    /// Fields are expected to be non-empty already; surrounding whitespace
    /// is ignored when parsing. Weight and height must be positive, body
    /// fat must lie in `0..100`.
    pub fn from_form(
        values: &FormValues,
        gender: Gender,
        activity: ActivityLevel,
        body_fat: Option<&str>,
    ) -> Result<Self> {
        let age = parse_field::<u32>(FieldId::Age.display_name(), values.get(FieldId::Age))?;
        let weight_kg = parse_positive(FieldId::Weight.display_name(), values.get(FieldId::Weight))?;
        let height_cm = parse_positive(FieldId::Height.display_name(), values.get(FieldId::Height))?;

        // An empty body fat field means "not provided".
        let body_fat_pct = match body_fat.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let pct = parse_field::<f64>("Body fat", raw)?;
                if !(0.0..100.0).contains(&pct) {
                    return Err(invalid("Body fat", raw, "must be between 0 and 100"));
                }
                Some(pct)
            }
            None => None,
        };

        Ok(Self {
            gender,
            age,
            weight_kg,
            height_cm,
            activity,
            body_fat_pct,
        })
    }
}

/// Which formula produced the calorie figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalorieFormula {
    MifflinStJeor,
    KatchMcardle,
}

/// Results shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub profile: BodyProfile,
    pub gender_label: &'static str,
    pub activity_label: &'static str,
    pub bmi: f64,
    pub bmi_class: BmiClass,
    pub daily_calories: u32,
    pub formula: CalorieFormula,
}

impl MetricsReport {
    /// Compute the report. Body fat, when present, selects Katch-McArdle.
    pub fn from_profile(profile: BodyProfile) -> Self {
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
        let (daily_calories, formula) = match profile.body_fat_pct {
            Some(pct) => (
                calculate_calories_bfat(profile.weight_kg, pct, profile.activity),
                CalorieFormula::KatchMcardle,
            ),
            None => {
                let kcal = calculate_calories(
                    profile.weight_kg,
                    profile.height_cm,
                    profile.age,
                    profile.gender,
                    profile.activity,
                );
                (kcal.round().max(0.0) as u32, CalorieFormula::MifflinStJeor)
            }
        };

        tracing::debug!(
            "Computed BMI {} and {} kcal via {:?}",
            bmi,
            daily_calories,
            formula
        );

        Self {
            gender_label: profile.gender.label(),
            activity_label: profile.activity.label(),
            bmi_class: classify_bmi(bmi),
            bmi,
            daily_calories,
            formula,
            profile,
        }
    }

    /// Human-readable lines, one per fact.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("BMI: {:.1} ({})", self.bmi, self.bmi_class),
            format!("Daily calories: {} kcal", self.daily_calories),
        ];
        if self.formula == CalorieFormula::KatchMcardle {
            lines.push("Calories based on body fat percentage".to_string());
        }
        lines
    }

    /// Lines describing the inputs used.
    pub fn detail_lines(&self) -> Vec<String> {
        let p = &self.profile;
        let mut lines = vec![
            format!("Gender: {}", self.gender_label),
            format!("Age: {}", p.age),
            format!("Weight: {} kg", p.weight_kg),
            format!("Height: {} cm", p.height_cm),
            format!("Activity: {}", self.activity_label),
        ];
        if let Some(pct) = p.body_fat_pct {
            lines.push(format!("Body fat: {}%", pct));
        }
        lines
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| invalid(field, raw, "not a number"))
}

fn parse_positive(field: &str, raw: &str) -> Result<f64> {
    let value = parse_field::<f64>(field, raw)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, raw, "must be greater than zero"));
    }
    Ok(value)
}

fn invalid(field: &str, raw: &str, reason: &str) -> FitformError {
    FitformError::InvalidFieldValue {
        field: field.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}
