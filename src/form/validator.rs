//! Required-field validation for the body-metrics form.
//!
//! The validator only checks emptiness. Whether a filled-in value is a
//! sensible number is decided later, when the submission is processed.

use crate::ui::UserInterface;

use super::{FieldId, FormValues};

/// Header line of the notification shown when fields are missing.
pub const MISSING_FIELDS_HEADER: &str = "Please fill out the following fields:\n";

/// Outcome of checking the form without notifying anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every required field has a value.
    Complete,
    /// These fields are empty, in check order.
    Missing(Vec<FieldId>),
}

impl Validation {
    /// Whether submission may proceed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Pre-submission check for the age, weight and height fields.
///
/// Stateless: every call rebuilds the missing list from scratch, so
/// repeated calls with the same values behave identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Check the values without any side effect.
    pub fn check(&self, values: &FormValues) -> Validation {
        let missing = missing_fields(values);
        if missing.is_empty() {
            Validation::Complete
        } else {
            Validation::Missing(missing)
        }
    }

    /// Validate the form before submission.
    ///
    /// Returns `true` when all fields are filled. Otherwise alerts the user
    /// with the list of empty fields and returns `false`; the alert blocks
    /// until the user acknowledges it when the UI is interactive.
    pub fn validate(&self, values: &FormValues, ui: &mut dyn UserInterface) -> bool {
        match self.check(values) {
            Validation::Complete => true,
            Validation::Missing(missing) => {
                tracing::debug!(
                    "Blocking submission, missing fields: {:?}",
                    missing.iter().map(FieldId::id).collect::<Vec<_>>()
                );
                if let Some(message) = failure_message(&missing) {
                    ui.alert(&message);
                }
                false
            }
        }
    }
}

/// Validate with a default [`FormValidator`].
pub fn validate(values: &FormValues, ui: &mut dyn UserInterface) -> bool {
    FormValidator::new().validate(values, ui)
}

/// Fields whose value is exactly the empty string, in check order.
pub fn missing_fields(values: &FormValues) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|field| values.is_empty(*field))
        .collect()
}

/// Notification text for the given missing fields, or `None` if none are missing.
pub fn failure_message(missing: &[FieldId]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let names: Vec<&str> = missing.iter().map(FieldId::display_name).collect();
    Some(format!("{}{}", MISSING_FIELDS_HEADER, names.join("\n")))
}
