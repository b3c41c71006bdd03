//! Standalone font-tool programs.
//!
//! The font tools are independent executables. [`ExternalTool`] finds the
//! program, runs it with the delegated arguments and hands back its exit
//! code unchanged.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::config::{SuiteConfig, DISPATCHED_VAR, VERSION_VAR};
use crate::error::{AfdkoError, Result};
use crate::ui::{hints, UserInterface};

use super::{Context, Subcommand};

/// Exit code when the tool program does not exist.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code when the tool program exists but cannot be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Runs a font tool installed as its own program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    program: String,
}

impl ExternalTool {
    /// Create a runner for the named program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Resolve the program path for the given configuration.
    pub fn resolve(&self, config: &SuiteConfig) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        resolve_program(&self.program, config.tool_dir.as_deref(), exe_dir.as_deref())
    }

    /// Start the program and wait for it.
    ///
    /// The child receives `args[1..]` as its arguments. On Unix its argv[0]
    /// is `args[0]`, so the tool sees the token it was invoked as.
    pub fn run(&self, ctx: &Context<'_>, args: &[String]) -> Result<ExitStatus> {
        let program = self.resolve(ctx.config);
        tracing::debug!(program = %program.display(), ?args, "starting tool");

        let mut cmd = Command::new(&program);
        cmd.args(args.iter().skip(1));
        if let Some(arg0) = args.first() {
            set_arg0(&mut cmd, arg0);
        }
        cmd.env(VERSION_VAR, &ctx.config.version);
        cmd.env(DISPATCHED_VAR, &self.program);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| AfdkoError::ToolLaunch {
            program: self.program.clone(),
            source,
        })?;

        tracing::debug!(program = %self.program, %status, "tool finished");
        Ok(status)
    }
}

impl Subcommand for ExternalTool {
    fn execute(&self, ui: &mut dyn UserInterface, ctx: &Context<'_>, args: &[String]) -> i32 {
        match self.run(ctx, args) {
            Ok(status) => exit_code(status),
            Err(err) => {
                let code = launch_failure_code(&err);
                ui.error(&format!("Error: {}", err));
                if code == EXIT_NOT_FOUND {
                    ui.hint(&hints::install_tool(&self.program));
                }
                code
            }
        }
    }
}

/// Pick the program path: tool directory, then the dispatcher's own
/// directory, then a bare name for `PATH` lookup.
pub fn resolve_program(program: &str, tool_dir: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
    let file_name = format!("{}{}", program, std::env::consts::EXE_SUFFIX);

    tool_dir
        .into_iter()
        .chain(exe_dir)
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(program))
}

/// Exit code reported for a finished child process.
///
/// A child killed by signal `n` reports `128 + n`.
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| signal_code(status))
        .unwrap_or(1)
}

#[cfg(unix)]
fn signal_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(|signal| 128 + signal)
}

#[cfg(not(unix))]
fn signal_code(_status: ExitStatus) -> Option<i32> {
    None
}

#[cfg(unix)]
fn set_arg0(cmd: &mut Command, arg0: &str) {
    use std::os::unix::process::CommandExt;
    cmd.arg0(arg0);
}

#[cfg(not(unix))]
fn set_arg0(_cmd: &mut Command, _arg0: &str) {}

fn launch_failure_code(err: &AfdkoError) -> i32 {
    match err {
        AfdkoError::ToolLaunch { source, .. } if source.kind() == io::ErrorKind::NotFound => {
            EXIT_NOT_FOUND
        }
        _ => EXIT_CANNOT_EXECUTE,
    }
}
