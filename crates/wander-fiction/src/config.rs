//! World configuration loaded from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FictionResult;
use crate::game::{Game, GameBuilder};

/// A complete game description, usually read from a `.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Title shown when the game starts.
    pub title: String,
    /// Room the player starts in.
    pub start: String,
    /// Name of the movement action, if not `"go"`.
    pub go_action: Option<String>,
    /// Name of the look action, if not `"look"`.
    pub look_action: Option<String>,
    /// Filler words skipped while matching actions.
    pub skip_words: Vec<String>,
    /// Action vocabulary.
    pub actions: Vec<PhraseConfig>,
    /// Direction vocabulary.
    pub directions: Vec<DirectionConfig>,
    /// Objects.
    pub objects: Vec<ObjectConfig>,
    /// Rooms.
    pub rooms: Vec<RoomConfig>,
    /// Exits between rooms.
    pub connections: Vec<ConnectionConfig>,
}

/// A canonical phrase with aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Canonical name.
    pub name: String,
    /// Other phrases with the same meaning.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A direction with aliases and an optional opposite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionConfig {
    /// Canonical name.
    pub name: String,
    /// Other phrases with the same meaning.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// The direction leading back.
    #[serde(default)]
    pub opposite: Option<String>,
}

/// An object the player can refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Canonical name.
    pub name: String,
    /// Text shown when examined.
    #[serde(default)]
    pub description: String,
    /// Other names for the object.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Actions that apply to the object.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Fixed replies, keyed by action.
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

/// A room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Unique name.
    pub name: String,
    /// Text shown on entering or looking.
    #[serde(default)]
    pub description: String,
    /// Objects placed in the room.
    #[serde(default)]
    pub objects: Vec<String>,
}

/// An exit between two rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Room the exit leaves from.
    pub from: String,
    /// Direction of travel.
    pub direction: String,
    /// Room the exit leads to.
    pub to: String,
    /// Whether to add the way back as well.
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl WorldConfig {
    /// Parse a world from JSON text.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the world as pretty-printed JSON.
    pub fn to_json(&self) -> FictionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the world and build a [`Game`].
    pub fn into_game(self) -> FictionResult<Game> {
        let mut builder = Game::builder();
        builder.title(self.title.as_str());

        for action in &self.actions {
            builder.action(&action.name, &as_strs(&action.aliases))?;
        }
        builder.skip_words(&as_strs(&self.skip_words));

        for direction in &self.directions {
            builder.direction(&direction.name, &as_strs(&direction.aliases))?;
        }
        for direction in &self.directions {
            if let Some(opposite) = &direction.opposite {
                builder.opposite(&direction.name, opposite)?;
            }
        }

        for object in &self.objects {
            add_object(&mut builder, object)?;
        }
        for room in &self.rooms {
            builder.room_with_objects(&room.name, &room.description, &as_strs(&room.objects))?;
        }
        for link in &self.connections {
            builder.connect(&link.from, &link.direction, &link.to, link.bidirectional)?;
        }

        if let Some(go) = &self.go_action {
            builder.go_action(go);
        }
        if let Some(look) = &self.look_action {
            builder.look_action(look);
        }
        if !self.start.is_empty() {
            builder.start(&self.start);
        }
        builder.build()
    }
}

fn add_object(builder: &mut GameBuilder, object: &ObjectConfig) -> FictionResult<()> {
    builder.object(
        &object.name,
        &object.description,
        &as_strs(&object.actions),
        &as_strs(&object.aliases),
    )?;
    for (action, response) in &object.responses {
        let response = response.clone();
        builder.on_object(&object.name, action, move |_| response.clone())?;
    }
    Ok(())
}

fn as_strs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}
