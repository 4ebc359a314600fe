pub mod check;
pub mod map;
pub mod play;

use std::fs;
use std::path::Path;

use tracing::debug;
use wander_fiction::{Game, WorldConfig};

/// The world played when no file is given.
const DEMO_WORLD: &str = include_str!("../../worlds/manor.json");

/// Read and build a world, falling back to the built-in demo.
fn load_game(path: Option<&Path>) -> Result<Game, String> {
    let json = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading world");
            fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?
        }
        None => DEMO_WORLD.to_string(),
    };

    let config = WorldConfig::from_json(&json).map_err(|e| format!("invalid world: {e}"))?;
    config.into_game().map_err(|e| format!("invalid world: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_world_builds() {
        let game = load_game(None).unwrap();
        assert_eq!(game.title(), "Hollow Manor");
        assert!(game.rooms().contains(game.start()));
    }
}
