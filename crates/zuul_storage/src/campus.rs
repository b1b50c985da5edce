//! The built-in university campus map.
//!
//! Eight rooms, fourteen exits, and ten items, expressed as tables and
//! assembled by [`WorldBuilder`].

use zuul_foundation::{Result, Weight};

use crate::direction::Direction;
use crate::item::Item;
use crate::world::{World, WorldBuilder};

/// Key of the room the player starts in.
pub const START_ROOM: &str = "outside";

/// Key of the room the goal item must be carried into.
pub const GOAL_ROOM: &str = "office";

/// Name of the item that wins the game.
pub const GOAL_ITEM: &str = "key";

/// Room keys and short descriptions.
pub const ROOMS: &[(&str, &str)] = &[
    ("outside", "outside the main entrance of the university"),
    ("theater", "in a lecture theater"),
    ("pub", "in the campus pub"),
    ("lab", "in a computing lab"),
    ("office", "in the computing admin office"),
    ("library", "in the university library"),
    ("garden", "in a peaceful garden"),
    ("basement", "in a dark basement"),
];

/// Exits as (room, direction, destination).
pub const EXITS: &[(&str, Direction, &str)] = &[
    ("outside", Direction::East, "theater"),
    ("outside", Direction::South, "lab"),
    ("outside", Direction::West, "pub"),
    ("outside", Direction::North, "library"),
    ("theater", Direction::West, "outside"),
    ("theater", Direction::North, "garden"),
    ("pub", Direction::East, "outside"),
    ("pub", Direction::Down, "basement"),
    ("lab", Direction::North, "outside"),
    ("lab", Direction::East, "office"),
    ("office", Direction::West, "lab"),
    ("library", Direction::South, "outside"),
    ("garden", Direction::South, "theater"),
    ("basement", Direction::Up, "pub"),
];

/// Initial items as (room, name, grams, description).
pub const ITEMS: &[(&str, &str, u32, &str)] = &[
    ("basement", "key", 100, "An ancient golden key with mysterious engravings"),
    ("basement", "torch", 300, "A flickering torch that provides light"),
    ("library", "book", 800, "A dusty old book about university history"),
    ("library", "map", 50, "A map of the university campus"),
    ("theater", "poster", 20, "A poster advertising the next play"),
    ("pub", "mug", 400, "An empty beer mug"),
    ("pub", "sandwich", 200, "A half-eaten sandwich"),
    ("lab", "laptop", 2000, "A powerful computing laptop"),
    ("lab", "notebook", 150, "A notebook full of code snippets"),
    ("garden", "flower", 10, "A beautiful red flower"),
];

/// Returns a builder preloaded with the campus tables.
#[must_use]
pub fn builder() -> WorldBuilder {
    let mut builder = WorldBuilder::new();
    for (key, description) in ROOMS {
        builder = builder.room(key, description);
    }
    for (from, direction, to) in EXITS {
        builder = builder.exit(from, *direction, to);
    }
    for (room, name, grams, description) in ITEMS {
        builder = builder.item(room, Item::new(name, description, Weight::grams(*grams)));
    }
    builder.start(START_ROOM)
}

/// Builds the campus world.
///
/// # Errors
///
/// Only fails if the tables above are inconsistent.
pub fn campus() -> Result<World> {
    builder().build()
}
