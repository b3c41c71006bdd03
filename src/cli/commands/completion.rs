//! Shell completions generation.
//!
//! `afdko completion <shell>` writes a completion script that offers every
//! registered command name, abbreviation and alias as the first argument.

use std::io::Write;

use clap::{CommandFactory, FromArgMatches, Parser};
use clap_complete::Shell;

use crate::error::Result;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::{Context, Subcommand};

/// Arguments for the `completion` command.
#[derive(Debug, Clone, Parser)]
#[command(name = "completion")]
#[command(about = "Generate shell completion script for afdko commands.")]
#[command(after_help = "Examples:\n  \
    eval \"$(afdko completion bash)\"\n  \
    afdko completion zsh > /usr/local/share/zsh/site-functions/_afdko\n  \
    afdko completion fish > ~/.config/fish/completions/afdko.fish\n  \
    afdko completion powershell | Out-String | Invoke-Expression")]
pub struct CompletionArgs {
    /// Shell to generate the completion script for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

/// The completion command implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionCommand;

impl CompletionCommand {
    fn run(&self, ctx: &Context<'_>, args: &[String]) -> Result<i32> {
        let invoked = args.first().map_or("completion", String::as_str);
        let cmd = CompletionArgs::command()
            .bin_name(format!("{} {}", ctx.config.suite_name, invoked));

        let parsed = cmd
            .try_get_matches_from(args)
            .and_then(|matches| CompletionArgs::from_arg_matches(&matches));
        let parsed = match parsed {
            Ok(parsed) => parsed,
            Err(err) => {
                // Help output goes to stdout, usage errors to stderr.
                err.print()?;
                return Ok(err.exit_code());
            }
        };

        tracing::debug!(shell = %parsed.shell, "generating completions");
        let script = render_script(parsed.shell, &ctx.config.suite_name, ctx.registry);

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;
        Ok(0)
    }
}

impl Subcommand for CompletionCommand {
    fn execute(&self, ui: &mut dyn UserInterface, ctx: &Context<'_>, args: &[String]) -> i32 {
        match self.run(ctx, args) {
            Ok(code) => code,
            Err(err) => {
                ui.error(&format!("Error: {}", err));
                1
            }
        }
    }

    fn completion_spec(&self) -> Option<clap::Command> {
        Some(CompletionArgs::command())
    }
}

/// Describe the suite's command surface to clap.
pub fn suite_command(suite: &str, registry: &Registry) -> clap::Command {
    let root = clap::Command::new(suite.to_string())
        .about("AFDKO Unified Command Interface")
        .disable_help_subcommand(true);

    registry.entries().fold(root, |cmd, entry| {
        let sub = entry
            .command()
            .completion_spec()
            .unwrap_or_else(|| clap::Command::new(entry.name().to_string()))
            .name(entry.name().to_string())
            .about(entry.description().to_string())
            .visible_aliases(entry.short_forms().map(str::to_string));
        cmd.subcommand(sub)
    })
}

/// Render the completion script for `shell`.
pub fn render_script(shell: Shell, suite: &str, registry: &Registry) -> String {
    let mut cmd = suite_command(suite, registry);
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, suite, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::ui::MockUI;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn parses_shell_argument() {
        let args = CompletionArgs::try_parse_from(["completion", "bash"]).unwrap();
        assert_eq!(args.shell, Shell::Bash);

        let args = CompletionArgs::try_parse_from(["completion", "PowerShell"]).unwrap();
        assert_eq!(args.shell, Shell::PowerShell);
    }

    #[test]
    fn rejects_unsupported_shell() {
        let err = CompletionArgs::try_parse_from(["completion", "tcsh"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn requires_a_shell() {
        assert!(CompletionArgs::try_parse_from(["completion"]).is_err());
    }

    #[test]
    fn suite_command_lists_entries_and_aliases() {
        let cmd = suite_command("afdko", &registry());
        let sfntedit = cmd.find_subcommand("sfntedit").unwrap();
        assert!(sfntedit.get_visible_aliases().any(|alias| alias == "se"));
        assert!(cmd.find_subcommand("tx").is_some());
        assert!(cmd.find_subcommand("completion").is_some());

        let autohint = cmd.find_subcommand("otfautohint").unwrap();
        let aliases: Vec<&str> = autohint.get_visible_aliases().collect();
        assert_eq!(aliases, ["ah", "autohint"]);
    }

    #[test]
    fn completion_entry_carries_shell_argument() {
        let cmd = suite_command("afdko", &registry());
        let completion = cmd.find_subcommand("completion").unwrap();
        assert!(completion.get_arguments().any(|arg| arg.get_id() == "shell"));

        let tx = cmd.find_subcommand("tx").unwrap();
        assert!(!tx.get_arguments().any(|arg| arg.get_id() == "shell"));
    }

    #[test]
    fn bash_script_offers_shell_names_after_completion() {
        let output = render_script(Shell::Bash, "afdko", &registry());
        assert!(output.contains("afdko__subcmd__completion"));
        assert!(output.contains("elvish"));
    }

    #[test]
    fn generates_bash_completions() {
        let output = render_script(Shell::Bash, "afdko", &registry());
        assert!(output.contains("afdko"));
        assert!(output.contains("complete"));
        assert!(output.contains("sfntedit"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = render_script(Shell::Zsh, "afdko", &registry());
        assert!(output.contains("#compdef afdko"));
        assert!(output.contains("makeotf"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = render_script(Shell::Fish, "afdko", &registry());
        assert!(output.contains("complete -c afdko"));
        assert!(output.contains("Font converter and analyzer"));
    }

    #[test]
    fn generates_powershell_completions() {
        let output = render_script(Shell::PowerShell, "afdko", &registry());
        assert!(output.contains("Register-ArgumentCompleter"));
        assert!(output.contains("otfautohint"));
    }

    #[test]
    fn unsupported_shell_returns_usage_error() {
        let config = SuiteConfig::default();
        let registry = registry();
        let ctx = Context::new(&config, &registry);
        let args = ["completion".to_string(), "tcsh".to_string()];
        let mut ui = MockUI::new();
        let code = CompletionCommand.execute(&mut ui, &ctx, &args);
        assert_eq!(code, 2);
        assert!(ui.errors().is_empty());
    }
}
