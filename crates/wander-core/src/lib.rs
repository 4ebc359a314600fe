//! Core types for Wander: phrase tables, the greedy phrase matcher, and the
//! room graph.
//!
//! This crate knows nothing about players or sessions. Vocabularies and the
//! graph are built once during setup and only read while commands are parsed,
//! so they can be shared freely between sessions.

/// Error types used throughout the crate.
pub mod error;
/// Rooms and the exits between them.
pub mod graph;
/// Tables of synonymous phrases.
pub mod lexicon;
/// Greedy prefix matching against a token stream.
pub mod matcher;
/// Phrases, tokenization, and the token stream.
pub mod phrase;
/// Action and direction vocabularies.
pub mod vocabulary;

/// Re-export error types.
pub use error::{WanderError, WanderResult};
/// Re-export room graph types.
pub use graph::{Exit, Room, RoomGraph};
/// Re-export lexicon types.
pub use lexicon::{Entry, PhraseTable};
/// Re-export matcher types.
pub use matcher::{SkipSet, eat, eat_skipping};
/// Re-export phrase types.
pub use phrase::{Phrase, TokenStream, tokenize};
/// Re-export vocabulary types.
pub use vocabulary::{Actions, Directions, Vocabulary};
