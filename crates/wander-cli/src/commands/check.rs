use std::path::Path;

use colored::Colorize;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let game = super::load_game(world)?;

    let name = if game.title().is_empty() {
        "untitled world"
    } else {
        game.title()
    };
    println!("  {} '{}'.", "All checks passed for".green(), name);
    println!(
        "  {} rooms, {} exits, {} objects",
        game.rooms().len(),
        game.rooms().exit_count(),
        game.objects().len()
    );
    println!(
        "  {} actions, {} directions, {} skip words",
        game.actions().table().len(),
        game.directions().table().len(),
        game.actions().skip_words().len()
    );
    println!("  start: {}", game.start());

    Ok(())
}
