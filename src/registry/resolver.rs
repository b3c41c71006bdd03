//! Command registry and lookup.

use std::collections::HashSet;

use crate::error::{AfdkoError, Result};

use super::builtin;
use super::entry::CommandEntry;

/// Ordered, immutable set of registered subcommands.
///
/// Every name, abbreviation and alias is unique across the whole registry,
/// so a lookup can never be ambiguous.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Build a registry, rejecting empty or colliding identifiers.
    pub fn new(entries: Vec<CommandEntry>) -> Result<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            for ident in entry.identifiers() {
                if ident.is_empty() {
                    return Err(AfdkoError::InvalidCommandName {
                        name: ident.to_string(),
                    });
                }
                if !seen.insert(ident) {
                    return Err(AfdkoError::DuplicateCommand {
                        name: ident.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// The registry of every tool shipped with the suite.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::entries())
    }

    /// Find the entry for a name, abbreviation or alias.
    ///
    /// Names are matched before short forms, each in declaration order.
    pub fn lookup(&self, token: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name() == token)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.short_forms().any(|short| short == token))
            })
    }

    /// Find the entry whose primary name is exactly `name`.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
