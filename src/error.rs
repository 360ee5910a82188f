//! Error types for fitform operations.
//!
//! This module defines [`FitformError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! An incomplete form is *not* an error: the validator reports it by
//! returning `false` and alerting the user. Errors here cover everything
//! that prevents a command from running at all.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fitform operations.
#[derive(Debug, Error)]
pub enum FitformError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A filled-in field could not be interpreted as a number.
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A prompt was required but no answer is available.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fitform operations.
pub type Result<T> = std::result::Result<T, FitformError>;
