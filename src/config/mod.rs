//! Startup configuration for the dispatcher.
//!
//! Configuration comes only from the environment; no files are read.
//!
//! - [`suite`] - the injected [`SuiteConfig`]
//! - [`wrapper_mode`] - parsing of `AFDKO_WRAPPER_MODE`
//!
//! # Example
//!
//! ```
//! use afdko::config::{SuiteConfig, WrapperMode};
//!
//! let config = SuiteConfig::from_lookup(|key| match key {
//!     "AFDKO_WRAPPER_MODE" => Some("warn".to_string()),
//!     _ => None,
//! });
//! assert_eq!(config.wrapper_mode, WrapperMode::Warn);
//! assert_eq!(config.suite_name, "afdko");
//! ```

pub mod suite;
pub mod wrapper_mode;

pub use suite::{
    SuiteConfig, DISPATCHED_VAR, SUITE_NAME, TOOL_DIR_VAR, VERSION_VAR, WRAPPER_MODE_VAR,
};
pub use wrapper_mode::WrapperMode;
