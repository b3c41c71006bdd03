//! Command registry for the suite.
//!
//! The registry maps each subcommand's name, optional abbreviation and
//! aliases to its entry point. It is assembled once at startup and never modified.
//!
//! # Resolution Order
//!
//! Lookups match exactly (case-sensitive):
//! 1. Primary names, in declaration order
//! 2. Abbreviations and aliases, in declaration order
//!
//! # Example
//!
//! ```
//! use afdko::registry::Registry;
//!
//! let registry = Registry::builtin().unwrap();
//!
//! let entry = registry.lookup("se").unwrap();
//! assert_eq!(entry.name(), "sfntedit");
//! assert!(registry.lookup("bogus").is_none());
//! ```

pub mod builtin;
pub mod entry;
pub mod resolver;

pub use entry::{CommandEntry, Retirement};
pub use resolver::Registry;
