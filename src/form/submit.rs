//! Submission gating.
//!
//! Binds the validator as a pre-submission check: a failed validation
//! prevents the submit action from running at all.

use crate::error::Result;
use crate::ui::UserInterface;

use super::{missing_fields, FieldId, FormValidator, FormValues};

/// Result of attempting to submit the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    /// Validation passed and the action produced this value.
    Submitted(T),
    /// Validation failed; the action was not run.
    Blocked { missing: Vec<FieldId> },
}

impl<T> Submission<T> {
    /// Whether the action ran.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// The action's output, if it ran.
    pub fn into_submitted(self) -> Option<T> {
        match self {
            Self::Submitted(value) => Some(value),
            Self::Blocked { .. } => None,
        }
    }
}

/// Validate `values` and run `action` only if validation passes.
pub fn submit<T, F>(values: &FormValues, ui: &mut dyn UserInterface, action: F) -> Result<Submission<T>>
where
    F: FnOnce(&FormValues, &mut dyn UserInterface) -> Result<T>,
{
    if !FormValidator::new().validate(values, ui) {
        return Ok(Submission::Blocked {
            missing: missing_fields(values),
        });
    }

    tracing::debug!("Form complete, submitting");
    action(values, ui).map(Submission::Submitted)
}
