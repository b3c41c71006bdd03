//! Subcommand implementations.
//!
//! Each registry entry points at a [`Subcommand`], which provides a uniform
//! calling convention: an argument list in, an exit code out.
//!
//! # Architecture
//!
//! - [`ExternalTool`] runs a standalone font-tool program
//! - [`CompletionCommand`] generates shell completion scripts in-process
//!
//! The dispatcher hands every subcommand a [`Context`] carrying the injected
//! suite configuration and the registry it was resolved from.

pub mod completion;
pub mod external;

pub use completion::CompletionCommand;
pub use external::ExternalTool;

use crate::config::SuiteConfig;
use crate::registry::Registry;
use crate::ui::UserInterface;

/// Trait for subcommand entry points.
pub trait Subcommand {
    /// Run the subcommand.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for diagnostics
    /// * `ctx` - Suite configuration and registry
    /// * `args` - Argument list; `args[0]` is the token the subcommand was
    ///   invoked as, the rest are its own arguments
    ///
    /// # Returns
    ///
    /// The process exit code.
    fn execute(&self, ui: &mut dyn UserInterface, ctx: &Context<'_>, args: &[String]) -> i32;

    /// The subcommand's own arguments, for completion scripts.
    ///
    /// `None` when the arguments belong to a program the suite cannot
    /// describe.
    fn completion_spec(&self) -> Option<clap::Command> {
        None
    }
}

/// What a subcommand can see of the suite.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Configuration injected at startup.
    pub config: &'a SuiteConfig,

    /// The registry the subcommand was resolved from.
    pub registry: &'a Registry,
}

impl<'a> Context<'a> {
    /// Create a context.
    pub fn new(config: &'a SuiteConfig, registry: &'a Registry) -> Self {
        Self { config, registry }
    }
}
