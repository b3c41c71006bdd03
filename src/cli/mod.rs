//! Command-line interface for the suite.
//!
//! # Architecture
//!
//! - [`args`] - First-token classification and argument rewriting
//! - [`dispatcher`] - Routing from tokens to registry entries
//! - [`help`] - Usage text
//! - [`wrapper`] - Deprecated standalone-name invocations
//! - [`commands`] - Subcommand implementations

pub mod args;
pub mod commands;
pub mod dispatcher;
pub mod help;
pub mod wrapper;

pub use args::{delegated_args, is_help_token, HELP_TOKENS};
pub use commands::{CompletionCommand, Context, ExternalTool, Subcommand};
pub use dispatcher::{Dispatch, Dispatcher};
