//! Suite usage text.

use crate::config::SuiteConfig;
use crate::registry::Registry;
use crate::ui::{hints, UserInterface};

/// Width the command name column is padded to.
const NAME_WIDTH: usize = 20;

/// Render the usage text, one element per line.
///
/// Entries appear in registry declaration order.
pub fn usage_lines(config: &SuiteConfig, registry: &Registry) -> Vec<String> {
    let mut lines = vec![
        format!("Usage: {} <command> [options]", config.suite_name),
        String::new(),
        format!("AFDKO Unified Command Interface (version {})", config.version),
        String::new(),
        "Available Commands:".to_string(),
    ];

    lines.extend(registry.entries().map(|entry| {
        let mut line = format!(
            "  {:<width$} {}",
            entry.name(),
            entry.description(),
            width = NAME_WIDTH
        );
        let short_forms: Vec<&str> = entry.short_forms().collect();
        if !short_forms.is_empty() {
            line.push_str(&format!(" (abbrev: {})", short_forms.join(", ")));
        }
        line
    }));

    lines.push(String::new());
    lines.push(hints::command_help(&config.suite_name));
    lines
}

/// Write the usage text to standard output.
pub fn print_help(ui: &mut dyn UserInterface, config: &SuiteConfig, registry: &Registry) {
    for line in usage_lines(config, registry) {
        ui.message(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::ExternalTool;
    use crate::registry::CommandEntry;
    use crate::ui::MockUI;

    fn sample() -> Registry {
        Registry::new(vec![
            CommandEntry::new("tx", "Font converter and analyzer", ExternalTool::new("tx")),
            CommandEntry::new("sfntedit", "SFNT table editor", ExternalTool::new("sfntedit"))
                .abbrev("se"),
        ])
        .unwrap()
    }

    #[test]
    fn banner_comes_first() {
        let config = SuiteConfig::default().with_version("4.1.0");
        let lines = usage_lines(&config, &sample());
        assert_eq!(lines[0], "Usage: afdko <command> [options]");
        assert_eq!(lines[2], "AFDKO Unified Command Interface (version 4.1.0)");
        assert_eq!(lines[4], "Available Commands:");
    }

    #[test]
    fn one_line_per_entry_in_order() {
        let lines = usage_lines(&SuiteConfig::default(), &sample());
        assert_eq!(
            lines[5],
            "  tx                   Font converter and analyzer"
        );
        assert_eq!(
            lines[6],
            "  sfntedit             SFNT table editor (abbrev: se)"
        );
    }

    #[test]
    fn aliases_are_listed_after_the_abbreviation() {
        let registry = Registry::new(vec![CommandEntry::new(
            "otfautohint",
            "Auto-hint fonts",
            ExternalTool::new("otfautohint"),
        )
        .abbrev("ah")
        .alias("autohint")])
        .unwrap();
        let lines = usage_lines(&SuiteConfig::default(), &registry);
        assert_eq!(
            lines[5],
            "  otfautohint          Auto-hint fonts (abbrev: ah, autohint)"
        );
    }

    #[test]
    fn ends_with_command_help_hint() {
        let lines = usage_lines(&SuiteConfig::default(), &sample());
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "");
        assert_eq!(
            lines[8],
            "Run 'afdko <command> -h' for command-specific help."
        );
    }

    #[test]
    fn print_help_writes_to_stdout_only() {
        let mut ui = MockUI::new();
        print_help(&mut ui, &SuiteConfig::default(), &sample());
        assert!(ui.stdout().starts_with("Usage: afdko <command> [options]\n"));
        assert!(ui.stdout().contains("(abbrev: se)"));
        assert!(ui.stderr().is_empty());
    }
}
