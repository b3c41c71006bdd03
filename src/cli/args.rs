//! Argument-list handling.
//!
//! The suite does not parse its own arguments beyond the first token. These
//! helpers classify that token and build the argument list a subcommand
//! receives.

use std::path::Path;

/// Tokens that request the suite's usage text when given first.
pub const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];

/// Whether `token` asks for the suite's usage text.
pub fn is_help_token(token: &str) -> bool {
    HELP_TOKENS.contains(&token)
}

/// Build the argument list handed to a subcommand.
///
/// Returns `args[position..]` as a new list, so the matched token becomes
/// the subcommand's argv[0]. A position past the end yields an empty list.
///
/// ```
/// use afdko::cli::delegated_args;
///
/// let args = ["afdko", "se", "-v"].map(String::from);
/// assert_eq!(delegated_args(&args, 1), ["se", "-v"]);
/// ```
pub fn delegated_args(args: &[String], position: usize) -> Vec<String> {
    args.get(position..).unwrap_or_default().to_vec()
}

/// File name the process was invoked as, without directory or `.exe`.
pub fn invoked_name(arg0: &str) -> &str {
    let name = Path::new(arg0)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(arg0);
    name.strip_suffix(".exe").unwrap_or(name)
}
