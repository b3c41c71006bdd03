//! Terminal output for the dispatcher.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//! - [`hints`] with the fixed hint texts
//!
//! Usage text goes to stdout; diagnostics, warnings and hints go to stderr.
//!
//! # Example
//!
//! ```
//! use afdko::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Usage: afdko <command> [options]");
//! ui.error("Error: Unknown command 'bogus'");
//!
//! assert_eq!(ui.stdout(), "Usage: afdko <command> [options]\n");
//! assert!(ui.errors()[0].contains("bogus"));
//! ```

pub mod hints;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Write a line to standard output.
    fn message(&mut self, msg: &str);

    /// Write a warning line to standard error.
    fn warning(&mut self, msg: &str);

    /// Write an error line to standard error.
    fn error(&mut self, msg: &str);

    /// Write a hint line to standard error.
    fn hint(&mut self, msg: &str);
}
