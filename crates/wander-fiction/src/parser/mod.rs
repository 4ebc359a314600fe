//! Command parsing and fuzzy suggestions.

mod command;
mod suggest;

pub use command::{CommandParser, ParsedCommand};
pub use suggest::{fuzzy_match, suggest};
