//! Rooms and the directed exits between them.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{WanderError, WanderResult};

/// A place the player can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room name.
    pub name: String,
    /// Text shown when entering or looking around.
    pub description: String,
    /// Names of objects placed in this room.
    pub objects: Vec<String>,
}

impl Room {
    /// Create a room without objects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            objects: Vec::new(),
        }
    }
}

/// A labelled, one-way passage out of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Direction label, normally a canonical direction name.
    pub direction: String,
    /// Name of the room the exit leads to.
    pub target: String,
}

/// Rooms connected by direction-labelled exits.
///
/// Every room keeps its exits in the order they were added, and a room never
/// has two exits with the same label.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: HashMap<String, Room>,
    // insertion order of `rooms`
    order: Vec<String>,
    exits: HashMap<String, Vec<Exit>>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room.
    pub fn add_room(&mut self, room: Room) -> WanderResult<()> {
        if self.rooms.contains_key(&room.name) {
            return Err(WanderError::DuplicateRoom(room.name));
        }
        debug!(room = %room.name, "added room");
        self.order.push(room.name.clone());
        self.exits.insert(room.name.clone(), Vec::new());
        self.rooms.insert(room.name.clone(), room);
        Ok(())
    }

    /// Add a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: &str, direction: &str, to: &str) -> WanderResult<()> {
        self.check_exit(from, direction)?;
        self.require(to)?;
        self.push_exit(from, direction, to);
        Ok(())
    }

    /// Add an exit from `from` to `to` and a return exit labelled `back`.
    ///
    /// Either both exits are added or neither is.
    pub fn connect_bidirectional(
        &mut self,
        from: &str,
        direction: &str,
        to: &str,
        back: &str,
    ) -> WanderResult<()> {
        self.check_exit(from, direction)?;
        self.check_exit(to, back)?;
        if from == to && direction == back {
            return Err(WanderError::DuplicateExit {
                room: from.to_string(),
                direction: back.to_string(),
            });
        }
        self.push_exit(from, direction, to);
        self.push_exit(to, back, from);
        Ok(())
    }

    /// The room reached by leaving `from` towards `direction`.
    ///
    /// Returns `Ok(None)` when the room has no such exit, and an error when
    /// `from` was never registered.
    pub fn room_in_direction(&self, from: &str, direction: &str) -> WanderResult<Option<&str>> {
        Ok(self
            .adjacent_rooms(from)?
            .iter()
            .find(|exit| exit.direction == direction)
            .map(|exit| exit.target.as_str()))
    }

    /// All exits of a room, in the order they were added.
    ///
    /// A registered room without exits yields an empty slice; an unknown
    /// room is an error.
    pub fn adjacent_rooms(&self, from: &str) -> WanderResult<&[Exit]> {
        self.exits
            .get(from)
            .map(Vec::as_slice)
            .ok_or_else(|| WanderError::UnknownRoom(from.to_string()))
    }

    /// Look up a room by name.
    pub fn room(&self, name: &str) -> WanderResult<&Room> {
        self.require(name)
    }

    /// Whether a room with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// All rooms in registration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.order.iter().filter_map(|name| self.rooms.get(name))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total number of exits across all rooms.
    pub fn exit_count(&self) -> usize {
        self.exits.values().map(Vec::len).sum()
    }

    fn require(&self, name: &str) -> WanderResult<&Room> {
        self.rooms
            .get(name)
            .ok_or_else(|| WanderError::UnknownRoom(name.to_string()))
    }

    fn check_exit(&self, from: &str, direction: &str) -> WanderResult<()> {
        if self.room_in_direction(from, direction)?.is_some() {
            return Err(WanderError::DuplicateExit {
                room: from.to_string(),
                direction: direction.to_string(),
            });
        }
        Ok(())
    }

    fn push_exit(&mut self, from: &str, direction: &str, to: &str) {
        debug!(%from, %direction, %to, "connected rooms");
        self.exits.entry(from.to_string()).or_default().push(Exit {
            direction: direction.to_string(),
            target: to.to_string(),
        });
    }
}
