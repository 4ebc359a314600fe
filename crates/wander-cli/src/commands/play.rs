//! Interactive play over stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::info;
use wander_fiction::{FictionSession, Outcome};

/// Inputs that end the session.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let game = super::load_game(world)?;
    let mut session = FictionSession::new(&game);

    if !game.title().is_empty() {
        println!("  {}", game.title().bold());
        println!();
    }
    let intro = session.do_look().map_err(|e| e.to_string())?;
    print_outcome(&intro);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut turns = 0usize;
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| format!("cannot write output: {e}"))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("cannot read input: {e}"))?;
        if read == 0 {
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
            break;
        }

        let outcome = session.process(line).map_err(|e| e.to_string())?;
        print_outcome(&outcome);
        turns += 1;
    }

    info!(turns, room = %session.player().room, "session ended");
    println!("Goodbye.");
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Moved { to, .. } | Outcome::Looked { room: to, .. } => {
            println!("{}", to.bold());
            for line in outcome.lines() {
                println!("{line}");
            }
        }
        _ if outcome.is_failure() => {
            for line in outcome.lines() {
                println!("{}", line.yellow());
            }
        }
        _ => {
            for line in outcome.lines() {
                println!("{line}");
            }
        }
    }
    println!();
}
