//! Registry entries.

use std::fmt;

use crate::cli::commands::Subcommand;

/// Removal timeline for a tool's deprecated standalone wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retirement {
    /// Removed about six months after the unified command shipped.
    Early,
    /// Removed with the next major version.
    #[default]
    Standard,
}

impl Retirement {
    /// When the standalone wrapper goes away, in words.
    pub fn removal_text(self) -> &'static str {
        match self {
            Self::Early => "an upcoming release after September 2026",
            Self::Standard => "the next major version after March 2027",
        }
    }
}

/// One registrable subcommand.
pub struct CommandEntry {
    name: String,
    abbreviation: Option<String>,
    aliases: Vec<String>,
    description: String,
    retirement: Retirement,
    wrapper: bool,
    command: Box<dyn Subcommand>,
}

impl CommandEntry {
    /// Create an entry without an abbreviation.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        command: impl Subcommand + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
            aliases: Vec::new(),
            description: description.into(),
            retirement: Retirement::default(),
            wrapper: true,
            command: Box::new(command),
        }
    }

    /// Set the abbreviation.
    pub fn abbrev(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Add another short form the entry answers to.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// The entry was never installed as a standalone program.
    pub fn without_wrapper(mut self) -> Self {
        self.wrapper = false;
        self
    }

    /// Mark the standalone wrapper for early removal.
    pub fn early_retirement(mut self) -> Self {
        self.retirement = Retirement::Early;
        self
    }

    /// Primary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abbreviation, if any.
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Further short forms, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The abbreviation followed by the aliases.
    pub fn short_forms(&self) -> impl Iterator<Item = &str> {
        self.abbreviation
            .as_deref()
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// Every token that resolves to this entry, primary name first.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.short_forms())
    }

    /// One-line description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Wrapper removal timeline.
    pub fn retirement(&self) -> Retirement {
        self.retirement
    }

    /// Whether a deprecated standalone wrapper exists under the primary name.
    pub fn has_wrapper(&self) -> bool {
        self.wrapper
    }

    /// The entry point.
    pub fn command(&self) -> &dyn Subcommand {
        self.command.as_ref()
    }

    /// Whether `token` is one of this entry's identifiers.
    pub fn answers_to(&self, token: &str) -> bool {
        self.identifiers().any(|ident| ident == token)
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("abbreviation", &self.abbreviation)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .field("retirement", &self.retirement)
            .field("wrapper", &self.wrapper)
            .finish_non_exhaustive()
    }
}
