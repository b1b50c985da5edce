//! Integration tests for Layer 3: Runtime
//!
//! End-to-end play through the campus map, driven line by line.

mod properties;

use zuul_runtime::{Game, GameConfig};

/// Creates a fresh game on the campus map.
pub fn new_game() -> Game {
    Game::new(&GameConfig::default()).unwrap()
}

/// Returns the key of the room the player is in.
pub fn here(game: &Game) -> String {
    game.location().unwrap().key().to_string()
}

/// Runs each line in order, discarding the responses.
pub fn play(game: &mut Game, lines: &[&str]) {
    for line in lines {
        game.execute(line);
    }
}
