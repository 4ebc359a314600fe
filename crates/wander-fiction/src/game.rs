//! Game configuration: vocabularies, rooms, and reactions.

use tracing::{debug, warn};
use wander_core::{Actions, Directions, Room, RoomGraph, WanderError};

use crate::error::{FictionError, FictionResult};
use crate::objects::Objects;
use crate::parser::CommandParser;
use crate::reaction::{ReactionContext, Reactions};

/// Default name of the movement action.
pub const DEFAULT_GO_ACTION: &str = "go";
/// Default name of the look action.
pub const DEFAULT_LOOK_ACTION: &str = "look";

/// A fully configured game.
///
/// A `Game` never changes once built, so any number of
/// [`FictionSession`](crate::FictionSession)s can borrow the same one.
pub struct Game {
    title: String,
    actions: Actions,
    objects: Objects,
    directions: Directions,
    rooms: RoomGraph,
    reactions: Reactions,
    go_action: String,
    look_action: String,
    start: String,
}

impl Game {
    /// Start configuring a new game.
    pub fn builder() -> GameBuilder {
        GameBuilder::default()
    }

    /// A parser over this game's vocabularies.
    pub fn parser(&self) -> CommandParser<'_> {
        CommandParser::new(&self.actions, &self.objects, &self.directions)
    }

    /// The game's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Action vocabulary.
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    /// Registered objects.
    pub fn objects(&self) -> &Objects {
        &self.objects
    }

    /// Direction vocabulary.
    pub fn directions(&self) -> &Directions {
        &self.directions
    }

    /// The room graph.
    pub fn rooms(&self) -> &RoomGraph {
        &self.rooms
    }

    /// Registered reactions.
    pub fn reactions(&self) -> &Reactions {
        &self.reactions
    }

    /// Canonical name of the movement action.
    pub fn go_action(&self) -> &str {
        &self.go_action
    }

    /// Canonical name of the look action.
    pub fn look_action(&self) -> &str {
        &self.look_action
    }

    /// Name of the room new sessions start in.
    pub fn start(&self) -> &str {
        &self.start
    }
}

/// Step-by-step game configuration.
///
/// Every method validates its input immediately, so a misspelled room or a
/// clashing alias fails at the call that introduced it. Actions must be
/// registered before objects that list them, and objects before rooms that
/// contain them.
#[derive(Default)]
pub struct GameBuilder {
    title: String,
    actions: Actions,
    objects: Objects,
    directions: Directions,
    rooms: RoomGraph,
    reactions: Reactions,
    go_action: Option<String>,
    look_action: Option<String>,
    start: Option<String>,
}

impl GameBuilder {
    /// Set the game's title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Register an action and its aliases.
    pub fn action(&mut self, name: &str, aliases: &[&str]) -> FictionResult<&mut Self> {
        self.actions.add(name, aliases)?;
        Ok(self)
    }

    /// Add words that may be skipped while matching actions.
    pub fn skip_words(&mut self, words: &[&str]) -> &mut Self {
        self.actions.add_skip_words(words);
        self
    }

    /// Register a direction and its aliases.
    pub fn direction(&mut self, name: &str, aliases: &[&str]) -> FictionResult<&mut Self> {
        self.directions.add(name, aliases)?;
        Ok(self)
    }

    /// Declare two registered directions as opposites.
    pub fn opposite(&mut self, name: &str, opposite: &str) -> FictionResult<&mut Self> {
        self.directions
            .add_opposite(name, opposite)
            .map_err(|err| match err {
                WanderError::UnknownPhrase(name) => FictionError::UnknownDirection(name),
                other => other.into(),
            })?;
        Ok(self)
    }

    /// Register an object, the actions that apply to it, and its aliases.
    pub fn object(
        &mut self,
        name: &str,
        description: &str,
        actions: &[&str],
        aliases: &[&str],
    ) -> FictionResult<&mut Self> {
        let actions = actions
            .iter()
            .map(|action| self.canonical_action(action))
            .collect::<FictionResult<Vec<_>>>()?;
        self.objects.add(name, description, actions, aliases)?;
        Ok(self)
    }

    /// Register a room without objects.
    pub fn room(&mut self, name: &str, description: &str) -> FictionResult<&mut Self> {
        self.room_with_objects(name, description, &[])
    }

    /// Register a room containing registered objects.
    pub fn room_with_objects(
        &mut self,
        name: &str,
        description: &str,
        objects: &[&str],
    ) -> FictionResult<&mut Self> {
        let mut room = Room::new(name, description);
        for object in objects {
            room.objects.push(self.objects.get(object)?.name.clone());
        }
        self.rooms.add_room(room)?;
        Ok(self)
    }

    /// Connect two rooms.
    ///
    /// The direction may be any alias. A bidirectional connection labels
    /// the way back with the direction's opposite, or with the same
    /// direction when no opposite was declared.
    pub fn connect(
        &mut self,
        from: &str,
        direction: &str,
        to: &str,
        bidirectional: bool,
    ) -> FictionResult<&mut Self> {
        let direction = self
            .directions
            .canonicalize(direction)
            .ok_or_else(|| FictionError::UnknownDirection(direction.to_string()))?;

        if bidirectional {
            let back = match self.directions.opposite(&direction) {
                Some(opposite) => opposite.to_string(),
                None => {
                    warn!(%direction, %from, %to, "no opposite direction; reusing label for the way back");
                    direction.clone()
                }
            };
            self.rooms.connect_bidirectional(from, &direction, to, &back)?;
        } else {
            self.rooms.connect(from, &direction, to)?;
        }
        Ok(self)
    }

    /// Run `reaction` whenever `action` is used and nothing more specific
    /// handles it.
    pub fn on_action<F>(&mut self, action: &str, reaction: F) -> FictionResult<&mut Self>
    where
        F: Fn(&mut ReactionContext<'_>) -> String + 'static,
    {
        let action = self.canonical_action(action)?;
        debug!(%action, "registered action reaction");
        self.reactions.insert_action(action, reaction);
        Ok(self)
    }

    /// Run `reaction` when `action` is used on `object`. The object must
    /// list the action among the ones it supports.
    pub fn on_object<F>(&mut self, object: &str, action: &str, reaction: F) -> FictionResult<&mut Self>
    where
        F: Fn(&mut ReactionContext<'_>) -> String + 'static,
    {
        let action = self.canonical_action(action)?;
        let object = self.objects.get(object)?;
        if !object.supports(&action) {
            return Err(FictionError::ActionNotSupported {
                object: object.name.clone(),
                action,
            });
        }
        let object = object.name.clone();
        debug!(%object, %action, "registered object reaction");
        self.reactions.insert_object(object, action, reaction);
        Ok(self)
    }

    /// Use another action as the movement action.
    pub fn go_action(&mut self, name: &str) -> &mut Self {
        self.go_action = Some(name.to_string());
        self
    }

    /// Use another action as the look action.
    pub fn look_action(&mut self, name: &str) -> &mut Self {
        self.look_action = Some(name.to_string());
        self
    }

    /// Set the room new sessions start in.
    pub fn start(&mut self, room: &str) -> &mut Self {
        self.start = Some(room.to_string());
        self
    }

    /// Validate the configuration and freeze it into a [`Game`].
    pub fn build(self) -> FictionResult<Game> {
        let start = self
            .start
            .clone()
            .ok_or_else(|| FictionError::InvalidConfig("no start room".to_string()))?;
        self.rooms.room(&start)?;

        let go_action = self.verb(self.go_action.as_deref(), DEFAULT_GO_ACTION)?;
        let look_action = self.verb(self.look_action.as_deref(), DEFAULT_LOOK_ACTION)?;
        if go_action == look_action {
            return Err(FictionError::InvalidConfig(format!(
                "\"{go_action}\" cannot be both the go and the look action"
            )));
        }

        debug!(
            rooms = self.rooms.len(),
            exits = self.rooms.exit_count(),
            objects = self.objects.len(),
            "built game"
        );

        Ok(Game {
            title: self.title,
            actions: self.actions,
            objects: self.objects,
            directions: self.directions,
            rooms: self.rooms,
            reactions: self.reactions,
            go_action,
            look_action,
            start,
        })
    }

    fn canonical_action(&self, action: &str) -> FictionResult<String> {
        self.actions
            .canonicalize(action)
            .ok_or_else(|| FictionError::UnknownAction(action.to_string()))
    }

    // An explicitly configured verb must exist; a missing default only warns.
    fn verb(&self, configured: Option<&str>, default: &str) -> FictionResult<String> {
        match configured {
            Some(name) => self.canonical_action(name),
            None => Ok(self.actions.canonicalize(default).unwrap_or_else(|| {
                warn!(action = default, "default action is not in the vocabulary");
                default.to_string()
            })),
        }
    }
}
