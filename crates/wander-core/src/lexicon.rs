//! Tables of synonymous phrases.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{WanderError, WanderResult};
use crate::phrase::Phrase;

/// One concept and every phrase that names it.
///
/// The first alias is the canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    aliases: Vec<Phrase>,
}

impl Entry {
    /// The canonical form of this entry.
    pub fn canonical(&self) -> &Phrase {
        &self.aliases[0]
    }

    /// All aliases, canonical form first.
    pub fn aliases(&self) -> &[Phrase] {
        &self.aliases
    }
}

/// A lexicon of entries with globally unique aliases.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    entries: Vec<Entry>,
    // alias -> index into `entries`
    index: HashMap<Phrase, usize>,
    // (entry, alias) positions, longest alias first, stable on insertion
    by_length: Vec<(usize, usize)>,
}

impl PhraseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry named by `canonical` with optional extra aliases.
    ///
    /// Fails without modifying the table if any phrase is empty or already
    /// belongs to an entry.
    pub fn add_entry(&mut self, canonical: &str, aliases: &[&str]) -> WanderResult<&Entry> {
        let mut phrases = Vec::with_capacity(aliases.len() + 1);
        for text in std::iter::once(&canonical).chain(aliases) {
            let phrase = Phrase::parse(text)?;
            if let Some(&owner) = self.index.get(&phrase) {
                return Err(WanderError::DuplicateAlias {
                    alias: phrase.to_string(),
                    canonical: self.entries[owner].canonical().to_string(),
                });
            }
            if phrases.contains(&phrase) {
                return Err(WanderError::DuplicateAlias {
                    alias: phrase.to_string(),
                    canonical: canonical.to_string(),
                });
            }
            phrases.push(phrase);
        }

        let entry_idx = self.entries.len();
        debug!(canonical = %phrases[0], aliases = phrases.len(), "added entry");
        self.entries.push(Entry { aliases: phrases });

        for (alias_idx, phrase) in self.entries[entry_idx].aliases.iter().enumerate() {
            self.index.insert(phrase.clone(), entry_idx);
            // after every alias that is at least as long
            let pos = self.by_length.partition_point(|&(e, a)| {
                self.entries[e].aliases[a].len() >= phrase.len()
            });
            self.by_length.insert(pos, (entry_idx, alias_idx));
        }

        Ok(&self.entries[entry_idx])
    }

    /// Resolve any alias to its entry's canonical form.
    pub fn canonicalize(&self, phrase: &Phrase) -> Option<&Phrase> {
        self.entry_for(phrase).map(Entry::canonical)
    }

    /// Resolve alias text to its canonical form, rendered as text.
    pub fn canonicalize_str(&self, text: &str) -> Option<String> {
        let phrase = Phrase::parse(text).ok()?;
        self.canonicalize(&phrase).map(ToString::to_string)
    }

    /// The entry owning `phrase`, if any.
    pub fn entry_for(&self, phrase: &Phrase) -> Option<&Entry> {
        self.index.get(phrase).map(|&idx| &self.entries[idx])
    }

    /// Whether `phrase` is an alias of some entry.
    pub fn contains(&self, phrase: &Phrase) -> bool {
        self.index.contains_key(phrase)
    }

    /// Every alias of every entry, longest first.
    ///
    /// Aliases with the same token count keep insertion order. Matching in
    /// this order guarantees that a longer alias is never shadowed by a
    /// shorter alias that is its prefix.
    pub fn aliases_by_length(&self) -> impl Iterator<Item = &Phrase> + '_ {
        self.by_length
            .iter()
            .map(|&(entry, alias)| &self.entries[entry].aliases[alias])
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
