//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    stderr: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to stdout.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Warning lines written to stderr.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Error lines written to stderr.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Hint lines written to stderr.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Everything written to stdout, newline-terminated.
    pub fn stdout(&self) -> String {
        join_lines(&self.messages)
    }

    /// Everything written to stderr in order, newline-terminated.
    pub fn stderr(&self) -> String {
        join_lines(&self.stderr)
    }
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.stderr.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.stderr.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
        self.stderr.push(msg.to_string());
    }
}
