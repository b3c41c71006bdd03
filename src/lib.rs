//! afdko - unified command interface for the font development tool suite.
//!
//! Every font tool in the suite is an independent program. This crate
//! provides the single `afdko` entry point that resolves a subcommand name
//! or abbreviation and hands the remaining arguments to that tool.
//!
//! # Modules
//!
//! - [`cli`] - Dispatching, argument rewriting, help and subcommands
//! - [`config`] - Startup configuration injected into the dispatcher
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The command registry and the built-in tool table
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use afdko::cli::Dispatcher;
//! use afdko::config::SuiteConfig;
//! use afdko::registry::Registry;
//! use afdko::ui::MockUI;
//!
//! let dispatcher = Dispatcher::new(SuiteConfig::default(), Registry::builtin().unwrap());
//! let mut ui = MockUI::new();
//!
//! let code = dispatcher.run(&["afdko".to_string(), "--help".to_string()], &mut ui);
//! assert_eq!(code, 0);
//! assert!(ui.stdout().contains("sfntedit"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{AfdkoError, Result};
