//! afdko CLI entry point.

use afdko::cli::Dispatcher;
use afdko::config::SuiteConfig;
use afdko::registry::Registry;
use afdko::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Variable holding the log filter, checked before `RUST_LOG`.
const LOG_VAR: &str = "AFDKO_LOG";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `AFDKO_LOG` environment variable (if set)
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so tool output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("afdko=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!(?args, "afdko starting");

    let config = SuiteConfig::from_env();
    let mut ui = TerminalUI::new();

    let registry = match Registry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(config, registry);
    let code = dispatcher.run(&args, &mut ui);

    // ExitCode only carries a u8; tool exit codes pass through unchanged.
    std::process::exit(code);
}
