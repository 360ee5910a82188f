//! Visual theme and styling.

use console::Style;

/// fitform's visual theme.
#[derive(Debug, Clone)]
pub struct FitformTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages and alerts (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for FitformTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FitformTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a multi-line alert inside a bordered box.
    pub fn format_alert(&self, msg: &str) -> String {
        let b = &self.border;
        let mut lines = vec![format!("{}", b.apply_to("┌────────────────────────────────────"))];
        for line in msg.lines() {
            lines.push(format!("{} {}", b.apply_to("│"), self.warning.apply_to(line)));
        }
        lines.push(format!("{}", b.apply_to("└────────────────────────────────────")));
        lines.join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
