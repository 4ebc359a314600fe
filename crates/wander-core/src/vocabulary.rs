//! Actions and directions: phrase tables with matching policies attached.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{WanderError, WanderResult};
use crate::lexicon::PhraseTable;
use crate::matcher::{SkipSet, eat, eat_skipping};
use crate::phrase::TokenStream;

/// Something that can recognize a canonical name at the front of a stream.
pub trait Vocabulary {
    /// Consume a known phrase from the front of `stream` and return its
    /// canonical name, or `None` (leaving the stream as is).
    fn eat(&self, stream: &mut TokenStream) -> Option<String>;
}

impl Vocabulary for PhraseTable {
    fn eat(&self, stream: &mut TokenStream) -> Option<String> {
        let alias = eat(self.aliases_by_length(), stream)?;
        self.canonicalize(alias).map(ToString::to_string)
    }
}

/// Action verbs such as `"go"` or `"pick up"`, matched with skip words.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    table: PhraseTable,
    skip_words: SkipSet,
}

impl Actions {
    /// Create an empty action vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action and its aliases.
    pub fn add(&mut self, name: &str, aliases: &[&str]) -> WanderResult<()> {
        self.table.add_entry(name, aliases)?;
        Ok(())
    }

    /// Add filler words that may be skipped while matching actions.
    pub fn add_skip_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skip_words.extend(words);
        debug!(count = self.skip_words.len(), "updated skip words");
    }

    /// Canonical action name for any alias.
    pub fn canonicalize(&self, name: &str) -> Option<String> {
        self.table.canonicalize_str(name)
    }

    /// The underlying phrase table.
    pub fn table(&self) -> &PhraseTable {
        &self.table
    }

    /// The skip words.
    pub fn skip_words(&self) -> &SkipSet {
        &self.skip_words
    }
}

impl Vocabulary for Actions {
    fn eat(&self, stream: &mut TokenStream) -> Option<String> {
        let alias = eat_skipping(self.table.aliases_by_length(), &self.skip_words, stream)?;
        self.table.canonicalize(alias).map(ToString::to_string)
    }
}

/// Direction names with aliases and opposite pairs.
#[derive(Debug, Clone, Default)]
pub struct Directions {
    table: PhraseTable,
    opposites: HashMap<String, String>,
}

impl Directions {
    /// Create an empty direction vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a direction and its aliases.
    pub fn add(&mut self, name: &str, aliases: &[&str]) -> WanderResult<()> {
        self.table.add_entry(name, aliases)?;
        Ok(())
    }

    /// Declare two directions as opposites of each other.
    ///
    /// Either name may be an alias; the pairing is stored between canonical
    /// names in both directions.
    pub fn add_opposite(&mut self, name: &str, opposite: &str) -> WanderResult<()> {
        let name = self.require(name)?;
        let opposite = self.require(opposite)?;
        debug!(%name, %opposite, "paired opposite directions");
        self.opposites.insert(name.clone(), opposite.clone());
        self.opposites.insert(opposite, name);
        Ok(())
    }

    /// The opposite of a direction, if one was declared.
    pub fn opposite(&self, name: &str) -> Option<&str> {
        let name = self.canonicalize(name)?;
        self.opposites.get(&name).map(String::as_str)
    }

    /// Canonical direction name for any alias.
    pub fn canonicalize(&self, name: &str) -> Option<String> {
        self.table.canonicalize_str(name)
    }

    /// The underlying phrase table.
    pub fn table(&self) -> &PhraseTable {
        &self.table
    }

    fn require(&self, name: &str) -> WanderResult<String> {
        self.canonicalize(name)
            .ok_or_else(|| WanderError::UnknownPhrase(name.to_string()))
    }
}

impl Vocabulary for Directions {
    fn eat(&self, stream: &mut TokenStream) -> Option<String> {
        self.table.eat(stream)
    }
}
