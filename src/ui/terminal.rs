//! Terminal UI writing to the process streams.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Writes usage to stdout and diagnostics to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when stderr supports it.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_hint(msg)).ok();
    }
}
