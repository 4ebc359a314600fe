//! Handlers bound to actions, optionally scoped to one object.

use std::collections::HashMap;

use wander_core::Room;

use crate::objects::Object;
use crate::parser::ParsedCommand;
use crate::player::PlayerState;

/// Everything a reaction may inspect or change.
pub struct ReactionContext<'a> {
    /// The command that triggered the reaction.
    pub command: &'a ParsedCommand,
    /// The room the player is in.
    pub room: &'a Room,
    /// The object the command named, if any.
    pub object: Option<&'a Object>,
    /// The player's state; reactions may change it.
    pub player: &'a mut PlayerState,
}

/// Behavior run when an action is recognized.
pub trait Reaction {
    /// Run the reaction and return the text to show the player.
    fn react(&self, ctx: &mut ReactionContext<'_>) -> String;
}

impl<F> Reaction for F
where
    F: Fn(&mut ReactionContext<'_>) -> String,
{
    fn react(&self, ctx: &mut ReactionContext<'_>) -> String {
        self(ctx)
    }
}

/// Registered reactions, keyed by canonical names.
#[derive(Default)]
pub struct Reactions {
    by_action: HashMap<String, Box<dyn Reaction>>,
    by_object: HashMap<(String, String), Box<dyn Reaction>>,
}

impl Reactions {
    /// Bind a reaction to an action regardless of object. Replaces any
    /// earlier binding.
    pub fn insert_action<F>(&mut self, action: String, reaction: F)
    where
        F: Fn(&mut ReactionContext<'_>) -> String + 'static,
    {
        self.by_action.insert(action, Box::new(reaction));
    }

    /// Bind a reaction to an action performed on one object. Replaces any
    /// earlier binding.
    pub fn insert_object<F>(&mut self, object: String, action: String, reaction: F)
    where
        F: Fn(&mut ReactionContext<'_>) -> String + 'static,
    {
        self.by_object.insert((object, action), Box::new(reaction));
    }

    /// The reaction bound to `action`, if any.
    pub fn for_action(&self, action: &str) -> Option<&dyn Reaction> {
        self.by_action.get(action).map(Box::as_ref)
    }

    /// The reaction bound to `action` on `object`, if any.
    pub fn for_object(&self, object: &str, action: &str) -> Option<&dyn Reaction> {
        self.by_object
            .get(&(object.to_string(), action.to_string()))
            .map(Box::as_ref)
    }

    /// Total number of bindings.
    pub fn len(&self) -> usize {
        self.by_action.len() + self.by_object.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
