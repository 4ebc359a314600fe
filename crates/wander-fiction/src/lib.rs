//! Interactive fiction engine for Wander.
//!
//! Turns lines of player input into actions over a room graph. A [`Game`]
//! bundles the vocabularies, objects, rooms, and reactions; it is built once,
//! through [`GameBuilder`] or a JSON [`WorldConfig`], and then shared by any
//! number of [`FictionSession`]s, each tracking one player.

/// World configuration loaded from JSON.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Game configuration and the builder that validates it.
pub mod game;
/// Objects the player can refer to.
pub mod objects;
/// Results of processing input.
pub mod outcome;
/// Command parsing and fuzzy suggestions.
pub mod parser;
/// Player state management.
pub mod player;
/// Reactions bound to actions and objects.
pub mod reaction;
/// Interactive fiction session management.
pub mod session;

pub use config::WorldConfig;
pub use error::{FictionError, FictionResult};
pub use game::{Game, GameBuilder};
pub use objects::{Object, Objects};
pub use outcome::{CommandError, Outcome};
pub use parser::{CommandParser, ParsedCommand};
pub use player::PlayerState;
pub use reaction::{Reaction, ReactionContext, Reactions};
pub use session::FictionSession;
