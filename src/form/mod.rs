//! Body-metrics form: fields, values, validation and submission.
//!
//! This module provides:
//! - [`FieldId`] for the three required inputs
//! - [`FormValues`] holding the text entered in each field
//! - [`FormValidator`] and [`validate`] for the pre-submission check
//! - [`submit`] to gate an action behind validation
//!
//! # Example
//!
//! ```
//! use fitform::form::{validate, FormValues};
//! use fitform::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let ok = validate(&FormValues::new("", "70", "180"), &mut ui);
//!
//! assert!(!ok);
//! assert_eq!(ui.alerts()[0], "Please fill out the following fields:\nAge");
//! ```

pub mod field;
pub mod submit;
pub mod validator;
pub mod values;

pub use field::FieldId;
pub use submit::{submit, Submission};
pub use validator::{
    failure_message, missing_fields, validate, FormValidator, Validation, MISSING_FIELDS_HEADER,
};
pub use values::FormValues;
