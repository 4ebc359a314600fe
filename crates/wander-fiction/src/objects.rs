//! Objects the player can refer to.

use tracing::debug;
use wander_core::{PhraseTable, TokenStream, Vocabulary};

use crate::error::{FictionError, FictionResult};

/// A thing in the world that commands can name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    /// Canonical name.
    pub name: String,
    /// Text shown when the object is examined.
    pub description: String,
    /// Canonical names of the actions that apply to this object.
    pub actions: Vec<String>,
}

impl Object {
    /// Whether `action` applies to this object.
    pub fn supports(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

/// All objects of a game, indexed by every alias.
#[derive(Debug, Clone, Default)]
pub struct Objects {
    table: PhraseTable,
    objects: Vec<Object>,
}

impl Objects {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under its name and extra aliases.
    ///
    /// The stored name is normalized the way input is tokenized, so
    /// `"Brass  Key"` is stored as `"brass key"`.
    pub fn add(
        &mut self,
        name: &str,
        description: impl Into<String>,
        actions: Vec<String>,
        aliases: &[&str],
    ) -> FictionResult<&Object> {
        let canonical = self.table.add_entry(name, aliases)?.canonical().to_string();
        debug!(object = %canonical, "added object");
        self.objects.push(Object {
            name: canonical,
            description: description.into(),
            actions,
        });
        Ok(&self.objects[self.objects.len() - 1])
    }

    /// Look up an object by any of its aliases.
    pub fn get(&self, name: &str) -> FictionResult<&Object> {
        self.table
            .canonicalize_str(name)
            .and_then(|canonical| self.objects.iter().find(|o| o.name == canonical))
            .ok_or_else(|| FictionError::UnknownObject(name.to_string()))
    }

    /// All objects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Object> + '_ {
        self.objects.iter()
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Vocabulary for Objects {
    fn eat(&self, stream: &mut TokenStream) -> Option<String> {
        self.table.eat(stream)
    }
}
