//! Command dispatching.
//!
//! This module provides the [`Dispatcher`], which resolves the first
//! command-line token to a registry entry and hands the rest of the
//! arguments to it:
//!
//! - no token: usage on stdout, exit 1
//! - `-h`, `--help`, `help`: usage on stdout, exit 0
//! - unknown token: error and hint on stderr, exit 1
//! - known token: the entry point's exit code, untouched
//!
//! Only the first token is examined. A help flag further along belongs to
//! the subcommand.

use crate::cli::args::{delegated_args, invoked_name, is_help_token};
use crate::cli::commands::Context;
use crate::cli::help;
use crate::cli::wrapper;
use crate::config::SuiteConfig;
use crate::error::{AfdkoError, Result};
use crate::registry::{CommandEntry, Registry};
use crate::ui::{hints, UserInterface};

/// Position of the subcommand token in the process arguments.
const COMMAND_POSITION: usize = 1;

/// What a process argument list asks the dispatcher to do.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// Print usage and succeed.
    Help,
    /// Run a subcommand under the suite name.
    Command(&'a CommandEntry),
    /// Run a subcommand through its deprecated standalone name.
    Wrapper(&'a CommandEntry),
}

/// Routes process arguments to registered subcommands.
#[derive(Debug)]
pub struct Dispatcher {
    config: SuiteConfig,
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(config: SuiteConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    /// The injected configuration.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// The registry commands are resolved from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Find the entry for a name or abbreviation.
    pub fn lookup(&self, token: &str) -> Option<&CommandEntry> {
        self.registry.lookup(token)
    }

    /// Decide what `args` asks for without running anything.
    pub fn classify(&self, args: &[String]) -> Result<Dispatch<'_>> {
        if let Some(entry) = self.wrapper_entry(args) {
            return Ok(Dispatch::Wrapper(entry));
        }

        let token = args
            .get(COMMAND_POSITION)
            .ok_or(AfdkoError::MissingCommand)?;

        if is_help_token(token) {
            return Ok(Dispatch::Help);
        }

        self.lookup(token)
            .map(Dispatch::Command)
            .ok_or_else(|| AfdkoError::UnknownCommand {
                name: token.clone(),
            })
    }

    /// Dispatch a full process argument list and return the exit code.
    pub fn run(&self, args: &[String], ui: &mut dyn UserInterface) -> i32 {
        let ctx = Context::new(&self.config, &self.registry);

        match self.classify(args) {
            Ok(Dispatch::Help) => {
                self.print_help(ui);
                0
            }
            Ok(Dispatch::Command(entry)) => {
                let delegated = delegated_args(args, COMMAND_POSITION);
                tracing::debug!(command = entry.name(), args = ?delegated, "dispatching");
                entry.command().execute(ui, &ctx, &delegated)
            }
            Ok(Dispatch::Wrapper(entry)) => wrapper::run_deprecated(ui, &ctx, entry, args),
            Err(AfdkoError::MissingCommand) => {
                tracing::debug!("no command given");
                self.print_help(ui);
                1
            }
            Err(err) => {
                tracing::debug!(%err, "dispatch failed");
                ui.error(&format!("Error: {}", err));
                ui.hint(&hints::after_unknown_command(&self.config.suite_name));
                1
            }
        }
    }

    /// Write the usage text to standard output.
    pub fn print_help(&self, ui: &mut dyn UserInterface) {
        help::print_help(ui, &self.config, &self.registry);
    }

    /// The entry named by argv[0], when the process runs under a tool's
    /// standalone name rather than the suite's.
    fn wrapper_entry(&self, args: &[String]) -> Option<&CommandEntry> {
        let name = invoked_name(args.first()?);
        if name == self.config.suite_name {
            return None;
        }
        self.registry.get(name).filter(|entry| entry.has_wrapper())
    }
}
