//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] capturing interactions for tests
//!
//! # Example
//!
//! ```
//! use fitform::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Body metrics");
//! ui.success("Report ready");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FitformTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write command output meant for other programs (JSON, YAML dumps).
    ///
    /// Always written to stdout, whatever the output mode.
    fn output(&mut self, text: &str);

    /// Show a blocking notification.
    ///
    /// Interactive implementations do not return until the user has
    /// acknowledged the message. Shown in every output mode.
    fn alert(&mut self, msg: &str);

    /// Show a prompt and return the answer.
    ///
    /// Input prompts return the text typed in; select prompts return the
    /// chosen option's value.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides/lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Free-form input prompt that accepts an empty answer.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input { allow_empty: true },
            default: None,
        }
    }

    /// Pick one of `options`; `default` is the value chosen when no
    /// answer is given.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>, default: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
            default: Some(default.to_string()),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input.
    Input { allow_empty: bool },
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}
