//! Player state management.

use std::collections::HashSet;

/// Per-session state of the player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Name of the room the player is in.
    pub room: String,
    /// Names of carried objects, in pickup order.
    pub inventory: Vec<String>,
    /// Story flags set by reactions (a lever pulled, a door unlocked).
    pub flags: HashSet<String>,
}

impl PlayerState {
    /// Create a player standing in `room` with empty hands.
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            inventory: Vec::new(),
            flags: HashSet::new(),
        }
    }

    /// Check if the player carries an object.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item == name)
    }

    /// Add an object to the inventory. Returns false if already carried.
    pub fn add_item(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_item(&name) {
            return false;
        }
        self.inventory.push(name);
        true
    }

    /// Remove an object from the inventory.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|item| item == name) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether a story flag is set.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Set a story flag.
    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }
}
