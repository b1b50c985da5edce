//! Integration tests for World state management
//!
//! Tests world immutability, structural sharing, and table-driven building.

use zuul_foundation::{ErrorKind, Weight};
use zuul_storage::{Direction, Inventory, Item, World, WorldBuilder};

fn lamp() -> Item {
    Item::new("lamp", "A brass lamp", Weight::grams(500))
}

fn small_world() -> World {
    WorldBuilder::new()
        .room("hall", "in a hall")
        .room("cellar", "in a cellar")
        .exit("hall", Direction::Down, "cellar")
        .exit("cellar", Direction::Up, "hall")
        .exit("cellar", Direction::North, "cellar")
        .item("cellar", lamp())
        .start("cellar")
        .build()
        .unwrap()
}

// =============================================================================
// World Building
// =============================================================================

#[test]
fn builder_resolves_start() {
    let world = small_world();
    assert_eq!(world.start(), world.room_id("cellar").unwrap());
    assert_eq!(world.room_count(), 2);
}

#[test]
fn builder_rejects_unknown_start() {
    let err = WorldBuilder::new()
        .room("hall", "in a hall")
        .start("attic")
        .build()
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownRoom("attic".to_string()));
}

#[test]
fn builder_rejects_item_in_unknown_room() {
    let err = WorldBuilder::new()
        .room("hall", "in a hall")
        .item("attic", lamp())
        .build()
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownRoom("attic".to_string()));
}

#[test]
fn exit_may_loop_back_to_same_room() {
    let world = small_world();
    let cellar = world.room_id("cellar").unwrap();
    assert_eq!(world.exit(cellar, Direction::North).unwrap(), cellar);
}

#[test]
fn rooms_iterates_in_declaration_order() {
    let world = small_world();
    let keys: Vec<_> = world.rooms().map(|(_, room)| room.key()).collect();
    assert_eq!(keys, vec!["hall", "cellar"]);
}

// =============================================================================
// World Immutability
// =============================================================================

#[test]
fn take_returns_new_world() {
    let world1 = small_world();
    let cellar = world1.room_id("cellar").unwrap();
    let (world2, item) = world1.take_item(cellar, "lamp").unwrap();

    assert_eq!(item, lamp());
    // Original world unchanged
    assert!(world1.room(cellar).unwrap().has_items());
    // New world has no lamp
    assert!(!world2.room(cellar).unwrap().has_items());
}

#[test]
fn take_missing_item_fails() {
    let world = small_world();
    let hall = world.room_id("hall").unwrap();
    let err = world.take_item(hall, "lamp").unwrap_err();
    assert_eq!(err.to_string(), "That item is not here.");
}

#[test]
fn put_returns_new_world() {
    let world1 = small_world();
    let hall = world1.room_id("hall").unwrap();
    let world2 = world1.put_item(hall, lamp()).unwrap();

    assert!(!world1.room(hall).unwrap().has_items());
    assert!(world2.room(hall).unwrap().item("LAMP").is_some());
}

#[test]
fn take_then_put_moves_item_between_rooms() {
    let world = small_world();
    let hall = world.room_id("hall").unwrap();
    let cellar = world.room_id("cellar").unwrap();

    let (world, item) = world.take_item(cellar, "lamp").unwrap();
    let world = world.put_item(hall, item).unwrap();

    assert!(world.room(hall).unwrap().item("lamp").is_some());
    assert!(world.room(cellar).unwrap().item("lamp").is_none());
}

// =============================================================================
// Inventory Transfers
// =============================================================================

#[test]
fn item_is_never_in_room_and_inventory_at_once() {
    let world = small_world();
    let cellar = world.room_id("cellar").unwrap();
    let inventory = Inventory::default();

    let (world, item) = world.take_item(cellar, "lamp").unwrap();
    let inventory = inventory.insert(item).unwrap();

    assert!(inventory.contains("lamp"));
    assert!(world.room(cellar).unwrap().item("lamp").is_none());

    let (inventory, item) = inventory.remove("lamp").unwrap();
    let world = world.put_item(cellar, item).unwrap();

    assert!(!inventory.contains("lamp"));
    assert!(world.room(cellar).unwrap().item("lamp").is_some());
}

#[test]
fn rejected_insert_leaves_inventory_unchanged() {
    let inventory = Inventory::new(Weight::grams(400));
    let err = inventory.insert(lamp()).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::TooHeavy { .. }));
    assert!(inventory.is_empty());
}
