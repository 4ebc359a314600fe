#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TINY_WORLD: &str = r#"{
    "title": "Two Rooms",
    "start": "shed",
    "skip_words": ["the"],
    "actions": [
        { "name": "go", "aliases": ["walk"] },
        { "name": "look", "aliases": ["l"] }
    ],
    "directions": [
        { "name": "out", "opposite": "in" },
        { "name": "in" }
    ],
    "rooms": [
        { "name": "shed", "description": "A cramped shed." },
        { "name": "yard", "description": "An overgrown yard." }
    ],
    "connections": [
        { "from": "shed", "direction": "out", "to": "yard" }
    ]
}"#;

/// Write `json` as a world file in a fresh temp directory.
fn world_file(json: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn wander() -> Command {
    let mut cmd = Command::cargo_bin("wander").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// wander play
// ---------------------------------------------------------------------------

#[test]
fn play_demo_moves_between_rooms() {
    wander()
        .arg("play")
        .write_stdin("go north\nlook\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hollow Manor"))
        .stdout(predicate::str::contains("A dusty foyer."))
        .stdout(predicate::str::contains("Shelves sag under mildewed books."))
        .stdout(predicate::str::contains("A foyer is to the south"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn play_reports_blocked_exit_and_continues() {
    wander()
        .arg("play")
        .write_stdin("go west\nwalk to the east\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You cannot go west"))
        .stdout(predicate::str::contains("A cold kitchen."));
}

#[test]
fn play_runs_object_reactions() {
    wander()
        .arg("play")
        .write_stdin("take the lamp\ngo n\nread the ledger\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The lamp is bolted to the table."))
        .stdout(predicate::str::contains("owed to someone called Mordecai"));
}

#[test]
fn play_suggests_close_action() {
    wander()
        .arg("play")
        .write_stdin("lokk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Did you mean "look"?"#));
}

#[test]
fn play_custom_world() {
    let (_dir, path) = world_file(TINY_WORLD);

    wander()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("walk out\ngo in\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two Rooms"))
        .stdout(predicate::str::contains("An overgrown yard."))
        .stdout(predicate::str::contains("A cramped shed."));
}

// ---------------------------------------------------------------------------
// wander check
// ---------------------------------------------------------------------------

#[test]
fn check_demo_world() {
    wander()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'Hollow Manor'"))
        .stdout(predicate::str::contains("5 rooms, 8 exits, 3 objects"))
        .stdout(predicate::str::contains("start: foyer"));
}

#[test]
fn check_custom_world() {
    let (_dir, path) = world_file(TINY_WORLD);

    wander()
        .args(["check", "-w"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rooms, 2 exits, 0 objects"));
}

#[test]
fn check_rejects_unknown_room() {
    let broken = TINY_WORLD.replace(r#""to": "yard""#, r#""to": "garden""#);
    let (_dir, path) = world_file(&broken);

    wander()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid world"))
        .stderr(predicate::str::contains("garden"));
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = world_file("{ \"rooms\": ");

    wander()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid world"));
}

#[test]
fn check_missing_file() {
    wander()
        .args(["check", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

// ---------------------------------------------------------------------------
// wander map
// ---------------------------------------------------------------------------

#[test]
fn map_lists_rooms_and_exits() {
    wander()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("[foyer] (start)"))
        .stdout(predicate::str::contains("north --> library"))
        .stdout(predicate::str::contains("down --> cellar"))
        .stdout(predicate::str::contains("objects: hatch"));
}

#[test]
fn map_shows_rooms_without_exits() {
    let one_way = TINY_WORLD.replace(
        r#""to": "yard" }"#,
        r#""to": "yard", "bidirectional": false }"#,
    );
    let (_dir, path) = world_file(&one_way);

    wander()
        .args(["map", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[yard]"))
        .stdout(predicate::str::contains("(no exits)"));
}
