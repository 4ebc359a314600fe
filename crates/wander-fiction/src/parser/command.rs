//! Command parsing for player input.

use std::fmt;

use tracing::debug;
use wander_core::{TokenStream, Vocabulary};

/// What the parser recognized in one line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Canonical action name, if one was recognized.
    pub action: Option<String>,
    /// Canonical object name, if one was recognized.
    pub object: Option<String>,
    /// Canonical direction name, if one was recognized.
    pub direction: Option<String>,
    /// Tokens no matcher consumed.
    pub leftover: Vec<String>,
}

impl ParsedCommand {
    /// Whether nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.object.is_none() && self.direction.is_none()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.action, &self.object, &self.direction]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .chain(self.leftover.iter().map(String::as_str))
            .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Runs the action, object, and direction matchers over one input line.
///
/// The matchers share a single token stream and run in that fixed order, so
/// each one only sees the tokens the previous ones did not consume.
#[derive(Clone, Copy)]
pub struct CommandParser<'a> {
    actions: &'a dyn Vocabulary,
    objects: &'a dyn Vocabulary,
    directions: &'a dyn Vocabulary,
}

impl<'a> CommandParser<'a> {
    /// Create a parser over the three vocabularies.
    pub fn new(
        actions: &'a dyn Vocabulary,
        objects: &'a dyn Vocabulary,
        directions: &'a dyn Vocabulary,
    ) -> Self {
        Self {
            actions,
            objects,
            directions,
        }
    }

    /// Parse a player input string into a command.
    pub fn parse(&self, input: &str) -> ParsedCommand {
        let mut stream = TokenStream::new(input);

        let action = self.actions.eat(&mut stream);
        let object = self.objects.eat(&mut stream);
        let direction = self.directions.eat(&mut stream);

        let command = ParsedCommand {
            action,
            object,
            direction,
            leftover: stream.remaining(),
        };
        debug!(?command, "parsed input");
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Objects;
    use wander_core::{Actions, Directions};

    struct Vocab {
        actions: Actions,
        objects: Objects,
        directions: Directions,
    }

    impl Vocab {
        fn parser(&self) -> CommandParser<'_> {
            CommandParser::new(&self.actions, &self.objects, &self.directions)
        }
    }

    fn vocab() -> Vocab {
        let mut actions = Actions::new();
        actions.add("go", &["walk", "head"]).unwrap();
        actions.add("look", &["l", "examine"]).unwrap();
        actions.add("look at", &[]).unwrap();
        actions.add("pick up", &["take"]).unwrap();
        actions.add_skip_words(["to", "the", "a"]);

        let mut objects = Objects::new();
        objects.add("door", "An oak door.", vec![], &[]).unwrap();
        objects.add("brass key", "A key.", vec![], &["key"]).unwrap();

        let mut directions = Directions::new();
        directions.add("north", &["n"]).unwrap();
        directions.add("south", &["s"]).unwrap();

        Vocab {
            actions,
            objects,
            directions,
        }
    }

    #[test]
    fn parse_go_direction() {
        let vocab = vocab();
        let command = vocab.parser().parse("go north");
        assert_eq!(command.action.as_deref(), Some("go"));
        assert_eq!(command.object, None);
        assert_eq!(command.direction.as_deref(), Some("north"));
        assert!(command.leftover.is_empty());
    }

    #[test]
    fn parse_with_filler_and_alias() {
        let vocab = vocab();
        let command = vocab.parser().parse("Walk to the N");
        assert_eq!(command.action.as_deref(), Some("go"));
        assert_eq!(command.direction.as_deref(), Some("north"));
    }

    #[test]
    fn parse_longest_action_then_object() {
        let vocab = vocab();
        let command = vocab.parser().parse("look at the door");
        assert_eq!(command.action.as_deref(), Some("look at"));
        assert_eq!(command.object.as_deref(), Some("door"));
        assert_eq!(command.direction, None);
    }

    #[test]
    fn parse_action_object_direction_in_order() {
        let vocab = vocab();
        let command = vocab.parser().parse("take key south now");
        assert_eq!(command.action.as_deref(), Some("pick up"));
        assert_eq!(command.object.as_deref(), Some("brass key"));
        assert_eq!(command.direction.as_deref(), Some("south"));
        assert_eq!(command.leftover, vec!["now"]);
    }

    #[test]
    fn parse_direction_without_action() {
        let vocab = vocab();
        let command = vocab.parser().parse("n");
        assert_eq!(command.action, None);
        assert_eq!(command.direction.as_deref(), Some("north"));
    }

    #[test]
    fn later_matchers_only_see_front_of_stream() {
        let vocab = vocab();
        // "dance" blocks everything behind it
        let command = vocab.parser().parse("dance north");
        assert!(command.is_empty());
        assert_eq!(command.leftover, vec!["dance", "north"]);
    }

    #[test]
    fn empty_input() {
        let vocab = vocab();
        let command = vocab.parser().parse("   ");
        assert!(command.is_empty());
        assert!(command.leftover.is_empty());
    }

    #[test]
    fn display_joins_recognized_parts() {
        let vocab = vocab();
        let command = vocab.parser().parse("take the key quickly");
        assert_eq!(command.to_string(), "pick up brass key quickly");
    }
}
