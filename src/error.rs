//! Error types for the afdko dispatcher.
//!
//! This module defines [`AfdkoError`], the error type used by the library,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dispatch failures (`UnknownCommand`, `MissingCommand`) are reported to
//!   the user and turned into exit codes, never panics
//! - Whatever a subcommand does is its own business; its exit code is passed
//!   through untouched
//! - Use `anyhow::Error` (via `AfdkoError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for dispatcher operations.
#[derive(Debug, Error)]
pub enum AfdkoError {
    /// The subcommand token matches no registered command.
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    /// No subcommand token was supplied.
    #[error("No command given")]
    MissingCommand,

    /// Two registry entries claim the same name or abbreviation.
    #[error("Command identifier '{name}' is registered more than once")]
    DuplicateCommand { name: String },

    /// A registry entry has an empty name or abbreviation.
    #[error("Invalid command identifier '{name}'")]
    InvalidCommandName { name: String },

    /// An external tool program could not be started.
    #[error("could not run '{program}': {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dispatcher operations.
pub type Result<T> = std::result::Result<T, AfdkoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_displays_name() {
        let err = AfdkoError::UnknownCommand {
            name: "bogus".into(),
        };
        assert_eq!(err.to_string(), "Unknown command 'bogus'");
    }

    #[test]
    fn duplicate_command_displays_name() {
        let err = AfdkoError::DuplicateCommand { name: "se".into() };
        assert!(err.to_string().contains("'se'"));
    }

    #[test]
    fn invalid_command_name_displays_name() {
        let err = AfdkoError::InvalidCommandName {
            name: String::new(),
        };
        assert!(err.to_string().contains("''"));
    }

    #[test]
    fn tool_launch_displays_program_and_reason() {
        let err = AfdkoError::ToolLaunch {
            program: "tx".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'tx'"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AfdkoError = io_err.into();
        assert!(matches!(err, AfdkoError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: AfdkoError = anyhow::anyhow!("something odd").into();
        assert!(matches!(err, AfdkoError::Other(_)));
        assert_eq!(err.to_string(), "something odd");
    }
}
