//! Hint texts shown alongside diagnostics.

/// Hint after an unknown command.
pub fn after_unknown_command(suite: &str) -> String {
    format!("Run '{} --help' for usage.", suite)
}

/// Closing line of the usage text.
pub fn command_help(suite: &str) -> String {
    format!("Run '{} <command> -h' for command-specific help.", suite)
}

/// Migration line for a deprecated standalone wrapper.
pub fn run_through_suite(suite: &str, command: &str) -> String {
    format!(
        "The command should now be run as \"{} {} [options]\".",
        suite, command
    )
}

/// How to silence deprecation warnings.
pub fn suppress_deprecation_warning() -> &'static str {
    "To suppress this warning, set AFDKO_WRAPPER_MODE=off."
}

/// How to allow deprecated wrappers again after they were made errors.
pub fn allow_deprecated_wrappers() -> &'static str {
    "To temporarily allow deprecated wrappers, set AFDKO_WRAPPER_MODE=off or AFDKO_WRAPPER_MODE=warn."
}

/// Hint when a tool program cannot be found.
pub fn install_tool(program: &str) -> String {
    format!(
        "Make sure '{}' is installed on PATH or in the directory named by AFDKO_TOOL_DIR.",
        program
    )
}
