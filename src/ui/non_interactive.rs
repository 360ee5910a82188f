//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{FitformError, Result};

use super::{OutputMode, Prompt, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "FITFORM_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Alerts are written to stderr and return immediately. Prompts are
/// answered from `FITFORM_PROMPT_<KEY>` variables or the prompt default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn alert(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
            .ok_or_else(|| FitformError::PromptUnavailable {
                key: prompt.key.clone(),
            })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            println!("\n{}\n", title);
        }
    }
}
