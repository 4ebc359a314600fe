//! Greedy prefix matching of phrases against a token stream.
//!
//! Both matchers try candidate aliases in the order given and stop at the
//! first one that matches; callers pass aliases longest first (see
//! [`PhraseTable::aliases_by_length`](crate::PhraseTable::aliases_by_length))
//! so that `"go north"` wins over `"go"`. There is no backtracking across
//! aliases: a shorter alias that matches is taken even if a longer match
//! could have been found by skipping more filler words.

use std::collections::HashSet;

use tracing::trace;

use crate::phrase::{Phrase, TokenStream};

/// Filler words that may be skipped while matching actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    words: HashSet<String>,
}

impl SkipSet {
    /// Create an empty skip set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add skip words. Each word is lowercased; whitespace inside a word is
    /// not meaningful since input is tokenized on whitespace.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
    }

    /// Whether `token` is a skip word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of skip words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no skip words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Consume the first alias that exactly prefixes the stream.
///
/// On a match the alias's tokens are removed from the stream and the alias is
/// returned. Otherwise the stream is left untouched.
pub fn eat<'a, I>(aliases: I, stream: &mut TokenStream) -> Option<&'a Phrase>
where
    I: IntoIterator<Item = &'a Phrase>,
{
    let alias = aliases.into_iter().find(|alias| stream.starts_with(alias))?;
    trace!(%alias, "matched");
    stream.consume(alias.len());
    Some(alias)
}

/// Consume the first alias that prefixes the stream, ignoring skip words.
///
/// Skip words may appear before the alias, between its tokens, and directly
/// after it; all of them are consumed along with the alias. Any other token
/// that does not continue the alias fails the candidate.
pub fn eat_skipping<'a, I>(aliases: I, skip: &SkipSet, stream: &mut TokenStream) -> Option<&'a Phrase>
where
    I: IntoIterator<Item = &'a Phrase>,
{
    for alias in aliases {
        if let Some(consumed) = walk(alias, skip, stream) {
            trace!(%alias, consumed, "matched with skip words");
            stream.consume(consumed);
            return Some(alias);
        }
    }
    None
}

/// Number of stream tokens `alias` would consume, or `None` if it fails.
fn walk(alias: &Phrase, skip: &SkipSet, stream: &TokenStream) -> Option<usize> {
    let wanted = alias.tokens();
    let mut matched = 0;
    let mut skipped = 0;

    while let Some(token) = stream.get(matched + skipped) {
        if skip.contains(token) {
            skipped += 1;
        } else if matched < wanted.len() && wanted[matched] == token {
            matched += 1;
        } else {
            break;
        }
    }

    (matched == wanted.len()).then_some(matched + skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhraseTable;
    use proptest::prelude::*;

    fn table(entries: &[&[&str]]) -> PhraseTable {
        let mut table = PhraseTable::new();
        for entry in entries {
            table.add_entry(entry[0], &entry[1..]).unwrap();
        }
        table
    }

    #[test]
    fn eat_prefers_longest_alias() {
        let table = table(&[&["go"], &["go north", "run north"]]);
        let mut stream = TokenStream::new("go north quickly");

        let matched = eat(table.aliases_by_length(), &mut stream).unwrap();
        assert_eq!(matched.to_string(), "go north");
        assert_eq!(stream.remaining(), vec!["quickly"]);
    }

    #[test]
    fn eat_without_match_leaves_stream_alone() {
        let table = table(&[&["north", "n"]]);
        let mut stream = TokenStream::new("the north");

        assert!(eat(table.aliases_by_length(), &mut stream).is_none());
        assert_eq!(stream.remaining(), vec!["the", "north"]);
    }

    #[test]
    fn eat_on_empty_stream() {
        let table = table(&[&["north"]]);
        let mut stream = TokenStream::new("");
        assert!(eat(table.aliases_by_length(), &mut stream).is_none());
    }

    #[test]
    fn eat_requires_whole_alias() {
        let table = table(&[&["brass key"]]);
        let mut stream = TokenStream::new("brass");
        assert!(eat(table.aliases_by_length(), &mut stream).is_none());
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn skipping_between_alias_tokens() {
        let table = table(&[&["go north"]]);
        let skip: SkipSet = ["to", "the"].into_iter().collect();
        let mut stream = TokenStream::new("go to the north");

        let matched = eat_skipping(table.aliases_by_length(), &skip, &mut stream).unwrap();
        assert_eq!(matched.to_string(), "go north");
        assert!(stream.is_empty());
    }

    #[test]
    fn skipping_short_alias_matches_first_token_only() {
        let table = table(&[&["go"]]);
        let skip: SkipSet = ["to", "the"].into_iter().collect();
        let mut stream = TokenStream::new("go to the north");

        let matched = eat_skipping(table.aliases_by_length(), &skip, &mut stream).unwrap();
        assert_eq!(matched.to_string(), "go");
        assert_eq!(stream.remaining(), vec!["north"]);
    }

    #[test]
    fn skipping_absorbs_filler_after_alias() {
        let table = table(&[&["look at"]]);
        let skip: SkipSet = ["the"].into_iter().collect();
        let mut stream = TokenStream::new("look at the door");

        let matched = eat_skipping(table.aliases_by_length(), &skip, &mut stream).unwrap();
        assert_eq!(matched.to_string(), "look at");
        assert_eq!(stream.remaining(), vec!["door"]);
    }

    #[test]
    fn skipping_leading_filler() {
        let table = table(&[&["look"]]);
        let skip: SkipSet = ["please"].into_iter().collect();
        let mut stream = TokenStream::new("please look");

        assert!(eat_skipping(table.aliases_by_length(), &skip, &mut stream).is_some());
        assert!(stream.is_empty());
    }

    #[test]
    fn skipping_fails_on_foreign_token_inside_alias() {
        let table = table(&[&["pick up"]]);
        let skip: SkipSet = ["the"].into_iter().collect();
        let mut stream = TokenStream::new("pick the red up");

        assert!(eat_skipping(table.aliases_by_length(), &skip, &mut stream).is_none());
        assert_eq!(stream.len(), 4);
    }

    #[test]
    fn skipping_fails_when_stream_runs_out() {
        let table = table(&[&["look at"]]);
        let skip: SkipSet = ["the"].into_iter().collect();
        let mut stream = TokenStream::new("look the");

        assert!(eat_skipping(table.aliases_by_length(), &skip, &mut stream).is_none());
        assert_eq!(stream.remaining(), vec!["look", "the"]);
    }

    #[test]
    fn skipping_falls_back_to_shorter_alias() {
        let table = table(&[&["look"], &["look at"]]);
        let skip = SkipSet::new();
        let mut stream = TokenStream::new("look around");

        let matched = eat_skipping(table.aliases_by_length(), &skip, &mut stream).unwrap();
        assert_eq!(matched.to_string(), "look");
        assert_eq!(stream.remaining(), vec!["around"]);
    }

    proptest! {
        #[test]
        fn longest_match_law(
            prefix in prop::collection::vec("[a-z]{1,5}", 1..4),
            extra in prop::collection::vec("[a-z]{1,5}", 1..3),
            tail in prop::collection::vec("[a-z]{1,5}", 0..3),
        ) {
            let short = prefix.join(" ");
            let long = format!("{} {}", short, extra.join(" "));
            let mut lexicon = PhraseTable::new();
            lexicon.add_entry(&short, &[]).unwrap();
            lexicon.add_entry(&long, &[]).unwrap();

            let input = format!("{} {}", long, tail.join(" "));
            let mut stream = TokenStream::new(&input);
            let matched = eat(lexicon.aliases_by_length(), &mut stream).unwrap();
            prop_assert_eq!(matched.to_string(), long.clone());
            prop_assert_eq!(stream.remaining(), tail.clone());

            let mut stream = TokenStream::new(&input);
            let matched = eat_skipping(lexicon.aliases_by_length(), &SkipSet::new(), &mut stream).unwrap();
            prop_assert_eq!(matched.to_string(), long);
            prop_assert_eq!(stream.remaining(), tail);
        }
    }
}
