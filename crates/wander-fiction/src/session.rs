//! Interactive fiction session management.

use tracing::{debug, info};

use crate::error::FictionResult;
use crate::game::Game;
use crate::outcome::{CommandError, Outcome};
use crate::parser::{ParsedCommand, suggest};
use crate::player::PlayerState;
use crate::reaction::ReactionContext;

/// One player's run through a [`Game`].
pub struct FictionSession<'g> {
    /// The shared, read-only game.
    game: &'g Game,
    /// The player's current state.
    player: PlayerState,
}

impl<'g> FictionSession<'g> {
    /// Create a session with the player in the game's start room.
    pub fn new(game: &'g Game) -> Self {
        Self {
            game,
            player: PlayerState::new(game.start()),
        }
    }

    /// Create a session with the player in a specific room.
    pub fn at_room(game: &'g Game, room: &str) -> FictionResult<Self> {
        game.rooms().room(room)?;
        Ok(Self {
            game,
            player: PlayerState::new(room),
        })
    }

    /// Get the game.
    pub fn game(&self) -> &'g Game {
        self.game
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a mutable reference to the player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Parse and execute one line of input.
    ///
    /// Mistakes in the input come back as [`Outcome::Rejected`] or
    /// [`Outcome::Unhandled`]; an error means the game itself is broken,
    /// e.g. the player stands in a room the graph does not know.
    pub fn process(&mut self, input: &str) -> FictionResult<Outcome> {
        let command = self.game.parser().parse(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: ParsedCommand) -> FictionResult<Outcome> {
        if let Some(outcome) = self.react_on_object(&command)? {
            return Ok(outcome);
        }

        let game = self.game;
        match command.action.as_deref() {
            Some(action) if action == game.go_action() => self.do_go(command.direction.as_deref()),
            Some(action) if action == game.look_action() => match command.object.as_deref() {
                Some(object) => self.do_examine(object),
                None => self.do_look(),
            },
            Some(action) => match game.reactions().for_action(action) {
                Some(reaction) => {
                    let room = game.rooms().room(&self.player.room)?;
                    let object = command
                        .object
                        .as_deref()
                        .map(|name| game.objects().get(name))
                        .transpose()?;
                    let mut ctx = ReactionContext {
                        command: &command,
                        room,
                        object,
                        player: &mut self.player,
                    };
                    let response = reaction.react(&mut ctx);
                    Ok(Outcome::Reacted {
                        action: action.to_string(),
                        response,
                    })
                }
                None => Ok(self.unhandled(command)),
            },
            None => Ok(self.unhandled(command)),
        }
    }

    /// Describe the current room and its exits.
    pub fn do_look(&self) -> FictionResult<Outcome> {
        let rooms = self.game.rooms();
        let room = rooms.room(&self.player.room)?;
        Ok(Outcome::Looked {
            room: room.name.clone(),
            description: room.description.clone(),
            exits: rooms.adjacent_rooms(&room.name)?.to_vec(),
        })
    }

    fn do_go(&mut self, direction: Option<&str>) -> FictionResult<Outcome> {
        let Some(direction) = direction else {
            return Ok(Outcome::Rejected(CommandError::MissingDirection));
        };

        let game = self.game;
        let rooms = game.rooms();
        let Some(target) = rooms.room_in_direction(&self.player.room, direction)? else {
            debug!(room = %self.player.room, %direction, "no exit");
            return Ok(Outcome::Rejected(CommandError::NoExit {
                direction: direction.to_string(),
            }));
        };

        let destination = rooms.room(target)?;
        let from = std::mem::replace(&mut self.player.room, destination.name.clone());
        info!(%from, to = %destination.name, "player moved");
        Ok(Outcome::Moved {
            from,
            to: destination.name.clone(),
            description: destination.description.clone(),
        })
    }

    fn do_examine(&self, name: &str) -> FictionResult<Outcome> {
        let object = self.game.objects().get(name)?;
        Ok(Outcome::Examined {
            object: object.name.clone(),
            description: object.description.clone(),
        })
    }

    fn react_on_object(&mut self, command: &ParsedCommand) -> FictionResult<Option<Outcome>> {
        let (Some(action), Some(object)) = (command.action.as_deref(), command.object.as_deref())
        else {
            return Ok(None);
        };
        let game = self.game;
        let Some(reaction) = game.reactions().for_object(object, action) else {
            return Ok(None);
        };

        let mut ctx = ReactionContext {
            command,
            room: game.rooms().room(&self.player.room)?,
            object: Some(game.objects().get(object)?),
            player: &mut self.player,
        };
        let response = reaction.react(&mut ctx);
        Ok(Some(Outcome::Reacted {
            action: action.to_string(),
            response,
        }))
    }

    fn unhandled(&self, command: ParsedCommand) -> Outcome {
        let suggestion = match (&command.action, command.leftover.first()) {
            (None, Some(word)) => suggest(self.game.actions().table(), word),
            _ => None,
        };
        debug!(%command, ?suggestion, "unhandled command");
        Outcome::Unhandled {
            command,
            suggestion,
        }
    }
}
