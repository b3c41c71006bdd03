//! Deprecated standalone wrappers.
//!
//! Before the unified command existed every tool was installed under its own
//! name. A symlink from such a name to the dispatcher keeps those invocations
//! working; [`WrapperMode`] decides whether they run silently, with a
//! deprecation warning, or not at all.

use crate::cli::args::delegated_args;
use crate::cli::commands::external::EXIT_NOT_FOUND;
use crate::cli::commands::Context;
use crate::config::WrapperMode;
use crate::registry::CommandEntry;
use crate::ui::{hints, UserInterface};

/// Run `entry` on behalf of its deprecated standalone name.
///
/// `args` is the full process argument list; the entry receives all of it,
/// argv[0] included.
pub fn run_deprecated(
    ui: &mut dyn UserInterface,
    ctx: &Context<'_>,
    entry: &CommandEntry,
    args: &[String],
) -> i32 {
    let name = entry.name();
    let suite = &ctx.config.suite_name;

    if ctx.config.is_dispatched_for(name) {
        // The tool program resolved back to the dispatcher.
        ui.error(&format!("Error: no standalone program found for '{}'", name));
        ui.hint(&hints::install_tool(name));
        return EXIT_NOT_FOUND;
    }

    let removal = entry.retirement().removal_text();
    match ctx.config.wrapper_mode {
        WrapperMode::Off => {}
        WrapperMode::Warn => {
            ui.warning(&format!(
                "DeprecationWarning: The '{}' command wrapper is deprecated and will be removed in {}.",
                name, removal
            ));
            ui.hint(&hints::run_through_suite(suite, name));
            ui.hint(hints::suppress_deprecation_warning());
        }
        WrapperMode::Error => {
            ui.error(&format!(
                "Error: The '{}' wrapper is deprecated and will be removed in {}.",
                name, removal
            ));
            ui.hint(&hints::run_through_suite(suite, name));
            ui.hint(hints::allow_deprecated_wrappers());
            return 1;
        }
    }

    tracing::debug!(command = name, mode = %ctx.config.wrapper_mode, "running deprecated wrapper");
    entry.command().execute(ui, ctx, &delegated_args(args, 0))
}
