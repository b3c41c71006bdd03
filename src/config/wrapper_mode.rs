//! Deprecated-wrapper behavior setting.

use std::fmt;
use std::str::FromStr;

/// How the dispatcher behaves when run through a tool's standalone name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapperMode {
    /// Run the tool without any notice.
    #[default]
    Off,
    /// Print a deprecation warning, then run the tool.
    Warn,
    /// Refuse to run the tool.
    Error,
}

impl FromStr for WrapperMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "silent" | "disabled" | "no" | "false" | "0" => Ok(Self::Off),
            "warn" | "warning" | "warnings" | "yes" | "true" | "1" => Ok(Self::Warn),
            "error" | "strict" | "fail" | "2" => Ok(Self::Error),
            _ => Err(format!("unknown wrapper mode: {}", s)),
        }
    }
}

impl fmt::Display for WrapperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}
