//! Phrases and the per-command token stream.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{WanderError, WanderResult};

/// Split text into lowercase tokens.
///
/// Consecutive whitespace collapses and leading/trailing whitespace is
/// ignored, so `"  Go   North "` yields `["go", "north"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// A non-empty sequence of tokens, such as `"go north"` or `"brass key"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phrase(Vec<String>);

impl Phrase {
    /// Parse a phrase from text.
    pub fn parse(text: &str) -> WanderResult<Self> {
        Self::from_tokens(tokenize(text))
    }

    /// Build a phrase from already tokenized words.
    pub fn from_tokens(tokens: Vec<String>) -> WanderResult<Self> {
        if tokens.is_empty() {
            return Err(WanderError::EmptyPhrase);
        }
        Ok(Self(tokens))
    }

    /// The tokens of this phrase.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; phrases cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// The remaining, not yet matched tokens of one input line.
///
/// Each matcher consumes tokens from the front, so later matchers only see
/// what earlier ones left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<String>,
}

impl TokenStream {
    /// Tokenize a raw input line.
    pub fn new(input: &str) -> Self {
        Self {
            tokens: tokenize(input).into(),
        }
    }

    /// Token at `index` from the front, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Whether the stream begins with every token of `phrase`, in order.
    pub fn starts_with(&self, phrase: &Phrase) -> bool {
        phrase.len() <= self.tokens.len()
            && phrase
                .tokens()
                .iter()
                .zip(&self.tokens)
                .all(|(expected, actual)| expected == actual)
    }

    /// Drop `count` tokens from the front (fewer if the stream is shorter).
    pub fn consume(&mut self, count: usize) {
        let count = count.min(self.tokens.len());
        self.tokens.drain(..count);
    }

    /// Remaining tokens, front first.
    pub fn remaining(&self) -> Vec<String> {
        self.tokens.iter().cloned().collect()
    }

    /// Number of remaining tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
