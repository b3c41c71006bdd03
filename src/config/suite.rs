//! Process-wide suite configuration.
//!
//! [`SuiteConfig`] is assembled once at startup from the environment and
//! handed to the dispatcher. Nothing mutates it afterwards.

use std::path::PathBuf;

use super::WrapperMode;

/// Name the suite is invoked under.
pub const SUITE_NAME: &str = "afdko";

/// Directory searched first for standalone tool programs.
pub const TOOL_DIR_VAR: &str = "AFDKO_TOOL_DIR";

/// Selects the deprecated-wrapper behavior.
pub const WRAPPER_MODE_VAR: &str = "AFDKO_WRAPPER_MODE";

/// Names the tool a child process was started for by the dispatcher.
pub const DISPATCHED_VAR: &str = "AFDKO_DISPATCHED";

/// Version string exported to child tool processes.
pub const VERSION_VAR: &str = "FDK_VERSION";

/// Configuration injected into the dispatcher and every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Name used in usage text and hints.
    pub suite_name: String,

    /// Suite version, shown in help and exported to tools.
    pub version: String,

    /// Directory holding the standalone tool programs, if configured.
    pub tool_dir: Option<PathBuf>,

    /// Behavior when invoked through a tool's standalone name.
    pub wrapper_mode: WrapperMode,

    /// Tool this process was started for by another dispatcher, if any.
    pub dispatched_tool: Option<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            suite_name: SUITE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            tool_dir: None,
            wrapper_mode: WrapperMode::default(),
            dispatched_tool: None,
        }
    }
}

impl SuiteConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let wrapper_mode = var(WRAPPER_MODE_VAR).map_or_else(WrapperMode::default, |raw| {
            raw.parse().unwrap_or_else(|_| {
                let fallback = WrapperMode::default();
                tracing::warn!(
                    "Invalid {}='{}'. Valid values: off, warn, error. Using default: '{}'",
                    WRAPPER_MODE_VAR,
                    raw,
                    fallback
                );
                fallback
            })
        });

        let config = Self {
            tool_dir: var(TOOL_DIR_VAR).map(PathBuf::from),
            wrapper_mode,
            dispatched_tool: var(DISPATCHED_VAR).map(|tool| tool.trim().to_string()),
            ..Self::default()
        };

        tracing::debug!(?config, "suite configuration loaded");
        config
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the tool directory.
    pub fn with_tool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tool_dir = Some(dir.into());
        self
    }

    /// Override the wrapper mode.
    pub fn with_wrapper_mode(mut self, mode: WrapperMode) -> Self {
        self.wrapper_mode = mode;
        self
    }

    /// Mark this process as started for `tool` by another dispatcher.
    pub fn with_dispatched_tool(mut self, tool: impl Into<String>) -> Self {
        self.dispatched_tool = Some(tool.into());
        self
    }

    /// Whether this process was started to run `tool` itself.
    pub fn is_dispatched_for(&self, tool: &str) -> bool {
        self.dispatched_tool.as_deref() == Some(tool)
    }
}
