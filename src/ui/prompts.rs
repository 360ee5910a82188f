//! Interactive prompts.

use console::Term;
use dialoguer::{Input, Select};

use crate::error::{FitformError, Result};

use super::{Prompt, PromptOption, PromptType};

/// Convert dialoguer errors to FitformError.
fn map_dialoguer_err(e: dialoguer::Error) -> FitformError {
    FitformError::Io(e.into())
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    match &prompt.prompt_type {
        PromptType::Input { allow_empty } => prompt_input(prompt, *allow_empty, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, allow_empty: bool, term: &Term) -> Result<String> {
    let input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(allow_empty);

    if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)
    } else {
        input.interact_on(term).map_err(map_dialoguer_err)
    }
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<String> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_index(prompt, options))
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(options[selection].value.clone())
}

/// Position of the prompt's default among `options`, or the first option.
fn default_index(prompt: &Prompt, options: &[PromptOption]) -> usize {
    prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0)
}
