//! Configuration validation rules.
//!
//! - Custom meals must have a name and a recipe link
//! - Custom meal calories must be positive and finite

use crate::config::schema::FitformConfig;
use crate::error::{FitformError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Index into `meals.custom` if the error is meal-specific
    pub meal: Option<usize>,
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &FitformConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, meal) in config.meals.custom.iter().enumerate() {
        let label = if meal.name.trim().is_empty() {
            format!("meals.custom[{}]", index)
        } else {
            format!("Meal '{}'", meal.name)
        };

        if meal.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-name".to_string(),
                message: format!("{} must have a name", label),
                meal: Some(index),
            });
        }

        if meal.recipe.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-recipe".to_string(),
                message: format!("{} must have a recipe link", label),
                meal: Some(index),
            });
        }

        if !meal.kcal.is_finite() || meal.kcal <= 0.0 {
            errors.push(ValidationError {
                rule: "invalid-kcal".to_string(),
                message: format!("{} must have positive calories, got {}", label, meal.kcal),
                meal: Some(index),
            });
        }
    }

    errors
}

/// Validate and return a single error listing every problem.
pub fn validate(config: &FitformConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(FitformError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::{Meal, MealType};

    fn config_with(meals: Vec<Meal>) -> FitformConfig {
        let mut config = FitformConfig::default();
        config.meals.custom = meals;
        config
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&FitformConfig::default()).is_ok());
    }

    #[test]
    fn reports_every_problem() {
        let config = config_with(vec![
            Meal::new("", "", 0.0, MealType::Dinner),
            Meal::new("Toast", "https://example.com", -5.0, MealType::Breakfast),
        ]);

        let errors = validate_config(&config);
        let rules: Vec<_> = errors.iter().map(|e| e.rule.as_str()).collect();
        assert_eq!(
            rules,
            vec!["missing-name", "missing-recipe", "invalid-kcal", "invalid-kcal"]
        );
        assert_eq!(errors[3].meal, Some(1));
        assert!(errors[3].message.contains("Meal 'Toast'"));
    }

    #[test]
    fn validate_joins_messages() {
        let config = config_with(vec![Meal::new("Soup", "", f64::NAN, MealType::Supper)]);
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("recipe"));
        assert!(err.contains("positive calories"));
    }
}
