//! Rooms of the world graph.

use std::sync::Arc;

use indexmap::IndexMap;
use zuul_foundation::RoomId;

use crate::direction::Direction;
use crate::item::Item;

/// A node of the world graph.
///
/// Exits are non-owning edges: they hold the [`RoomId`] of the neighbor, and
/// the [`World`](crate::World) owns every room. Exits keep their declaration
/// order, which is also the order they are listed in.
#[derive(Clone, Debug)]
pub struct Room {
    key: Arc<str>,
    description: Arc<str>,
    exits: Arc<IndexMap<Direction, RoomId>>,
    items: im::Vector<Item>,
}

impl Room {
    /// Creates a room with no exits and no items.
    #[must_use]
    pub fn new(key: &str, description: &str) -> Self {
        Self {
            key: Arc::from(key),
            description: Arc::from(description),
            exits: Arc::new(IndexMap::new()),
            items: im::Vector::new(),
        }
    }

    /// Returns the room's key, e.g. `"office"`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the short description, e.g. `"in a dark basement"`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the neighbor in the given direction.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Iterates over exits in declaration order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        self.exits.iter().map(|(dir, id)| (*dir, *id))
    }

    /// Returns true if an exit is declared in the given direction.
    #[must_use]
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits.contains_key(&direction)
    }

    /// Returns a copy of this room with an exit added or replaced.
    #[must_use]
    pub fn with_exit(&self, direction: Direction, neighbor: RoomId) -> Self {
        let mut exits = (*self.exits).clone();
        exits.insert(direction, neighbor);
        Self {
            exits: Arc::new(exits),
            ..self.clone()
        }
    }

    /// Finds an item by name, ignoring case.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Iterates over the items in this room.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns true if the room holds any items.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns a copy of this room with the item appended.
    #[must_use]
    pub fn with_item(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.push_back(item);
        Self {
            items,
            ..self.clone()
        }
    }

    /// Returns a copy of this room without the first item matching `name`,
    /// together with that item.
    #[must_use]
    pub fn without_item(&self, name: &str) -> Option<(Self, Item)> {
        let index = self.items.iter().position(|item| item.is_named(name))?;
        let mut items = self.items.clone();
        let item = items.remove(index);
        Some((
            Self {
                items,
                ..self.clone()
            },
            item,
        ))
    }

    /// Renders the `Exits:` line.
    #[must_use]
    pub fn exit_string(&self) -> String {
        let mut line = String::from("Exits:");
        for direction in self.exits.keys() {
            line.push(' ');
            line.push_str(direction.name());
        }
        line
    }

    /// Renders the `Items here:` block, or an empty string if there are none.
    #[must_use]
    pub fn item_string(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut block = String::from("Items here:");
        for item in &self.items {
            block.push_str("\n  - ");
            block.push_str(&item.to_string());
        }
        block
    }

    /// Renders the full description shown on entering or looking.
    #[must_use]
    pub fn long_description(&self) -> String {
        let mut text = format!("You are {}.\n{}", self.description, self.exit_string());
        if self.has_items() {
            text.push('\n');
            text.push_str(&self.item_string());
        }
        text
    }
}
