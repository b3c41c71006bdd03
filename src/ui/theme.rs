//! Visual theme and styling.

use console::Style;

/// Styles applied to diagnostics.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for hints (dim).
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            warning: Style::new().color256(208),
            hint: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            warning: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    /// Format a hint.
    pub fn format_hint(&self, msg: &str) -> String {
        self.hint.apply_to(msg).to_string()
    }
}

/// Whether diagnostics written to stderr should be colored.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}
