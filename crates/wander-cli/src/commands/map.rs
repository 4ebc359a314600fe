use std::path::Path;

use colored::Colorize;
use wander_core::Room;
use wander_fiction::Game;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let game = super::load_game(world)?;

    println!("  Map of '{}'", game.title());
    println!();
    for room in game.rooms().rooms() {
        render_room(&game, room)?;
    }

    Ok(())
}

fn render_room(game: &Game, room: &Room) -> Result<(), String> {
    let marker = if room.name == game.start() { " (start)" } else { "" };
    println!("  [{}]{}", room.name.bold(), marker.dimmed());

    let exits = game
        .rooms()
        .adjacent_rooms(&room.name)
        .map_err(|e| e.to_string())?;
    if exits.is_empty() {
        println!("    (no exits)");
    }
    for exit in exits {
        println!("    {} --> {}", exit.direction, exit.target);
    }
    if !room.objects.is_empty() {
        println!("    objects: {}", room.objects.join(", "));
    }
    println!();

    Ok(())
}
