//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, FitformTheme, NonInteractiveUI, OutputMode, Prompt,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: FitformTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FitformTheme::new()
        } else {
            FitformTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Wait until the user presses Enter.
    fn wait_for_acknowledgement(&mut self) {
        writeln!(
            self.term,
            "{}",
            self.theme.dim.apply_to("Press Enter to continue")
        )
        .ok();
        if let Err(e) = self.term.read_line() {
            tracing::debug!("Alert acknowledgement not read: {}", e);
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn output(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn alert(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_alert(msg)).ok();
        if self.term.is_term() {
            self.wait_for_acknowledgement();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
