//! Results of processing one line of input.

use std::fmt;

use thiserror::Error;
use wander_core::Exit;

use crate::parser::ParsedCommand;

/// A command the player got wrong. The game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Movement was requested without a recognizable direction.
    #[error("You must give a valid direction to go")]
    MissingDirection,

    /// The current room has no exit in the requested direction.
    #[error("You cannot go {direction}")]
    NoExit {
        /// The requested direction.
        direction: String,
    },
}

/// What happened in response to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player moved to another room.
    Moved {
        /// Room the player left.
        from: String,
        /// Room the player entered.
        to: String,
        /// Description of the new room.
        description: String,
    },
    /// The player looked around the current room.
    Looked {
        /// The room's name.
        room: String,
        /// The room's description.
        description: String,
        /// The room's exits, in order.
        exits: Vec<Exit>,
    },
    /// The player looked at an object.
    Examined {
        /// The object's name.
        object: String,
        /// The object's description.
        description: String,
    },
    /// A registered reaction handled the command.
    Reacted {
        /// The canonical action.
        action: String,
        /// The reaction's text.
        response: String,
    },
    /// The command was understood but cannot be carried out.
    Rejected(CommandError),
    /// Nothing handles this command.
    Unhandled {
        /// What the parser recognized.
        command: ParsedCommand,
        /// A close action name when no action was recognized.
        suggestion: Option<String>,
    },
}

impl Outcome {
    /// The output text, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Moved { description, .. } => vec![description.clone()],
            Self::Looked {
                description, exits, ..
            } => std::iter::once(description.clone())
                .chain(
                    exits
                        .iter()
                        .map(|exit| format!("A {} is to the {}", exit.target, exit.direction)),
                )
                .collect(),
            Self::Examined { description, .. } => vec![description.clone()],
            Self::Reacted { response, .. } => vec![response.clone()],
            Self::Rejected(err) => vec![err.to_string()],
            Self::Unhandled {
                command,
                suggestion,
            } => {
                let line = match suggestion {
                    Some(name) => format!("I don't understand that. Did you mean \"{name}\"?"),
                    None if command.is_empty() && command.leftover.is_empty() => {
                        "Nothing happens.".to_string()
                    }
                    None => format!("I don't know how to \"{command}\"."),
                };
                vec![line]
            }
        }
    }

    /// Whether the command changed nothing because it was a mistake or
    /// nobody handled it.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Unhandled { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
