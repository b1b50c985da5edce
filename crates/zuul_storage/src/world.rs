//! World state management with immutable snapshots.
//!
//! The `World` owns every room and their items. It uses persistent data
//! structures, so cloning is cheap and every mutation returns a new world
//! that shares structure with the old one. A command that fails halfway
//! simply never installs the new snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};
use zuul_foundation::{Error, ErrorKind, Result, RoomId};

use crate::direction::Direction;
use crate::item::Item;
use crate::room::Room;

/// The room arena and the fixed graph of exits between rooms.
#[derive(Clone, Debug)]
pub struct World {
    rooms: im::Vector<Room>,
    keys: Arc<HashMap<Arc<str>, RoomId>>,
    start: RoomId,
}

impl World {
    /// Returns the room the player starts in.
    #[must_use]
    pub const fn start(&self) -> RoomId {
        self.start
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the id was not issued by this world.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.index())
            .ok_or_else(|| Error::new(ErrorKind::Internal(format!("no room with id {id:?}"))))
    }

    /// Looks up a room id by key, e.g. `"office"`.
    #[must_use]
    pub fn room_id(&self, key: &str) -> Option<RoomId> {
        self.keys.get(key).copied()
    }

    /// Iterates over all rooms with their ids.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        (0u32..).map(RoomId::new).zip(self.rooms.iter())
    }

    /// Follows an exit.
    ///
    /// # Errors
    ///
    /// Returns `NoExit` if the room has no exit in that direction.
    pub fn exit(&self, from: RoomId, direction: Direction) -> Result<RoomId> {
        self.room(from)?
            .exit(direction)
            .ok_or_else(|| Error::no_exit(direction.name()))
    }

    /// Removes an item from a room, returning the new world and the item.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotHere` if the room holds no item with that name.
    pub fn take_item(&self, room: RoomId, name: &str) -> Result<(Self, Item)> {
        let (updated, item) = self
            .room(room)?
            .without_item(name)
            .ok_or_else(|| Error::item_not_here(name))?;
        debug!("removed {} from {}", item.name(), updated.key());
        Ok((self.with_room(room, updated), item))
    }

    /// Places an item in a room, returning the new world.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the room id is invalid.
    pub fn put_item(&self, room: RoomId, item: Item) -> Result<Self> {
        let current = self.room(room)?;
        debug!("placed {} in {}", item.name(), current.key());
        let updated = current.with_item(item);
        Ok(self.with_room(room, updated))
    }

    /// Lists exits that have no exit leading back along the opposite direction.
    #[must_use]
    pub fn one_way_exits(&self) -> Vec<(RoomId, Direction)> {
        let mut one_way = Vec::new();
        for (id, room) in self.rooms() {
            for (direction, neighbor) in room.exits() {
                let back = self
                    .room(neighbor)
                    .ok()
                    .and_then(|n| n.exit(direction.opposite()));
                if back != Some(id) {
                    one_way.push((id, direction));
                }
            }
        }
        one_way
    }

    fn with_room(&self, id: RoomId, room: Room) -> Self {
        trace!("replacing {id:?}");
        Self {
            rooms: self.rooms.update(id.index(), room),
            keys: Arc::clone(&self.keys),
            start: self.start,
        }
    }
}

/// Builds a [`World`] from declarative room, exit, and item tables.
///
/// Rooms are referred to by key until [`WorldBuilder::build`] resolves them
/// to ids, so declaration order between rooms and exits does not matter.
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    rooms: Vec<(String, String)>,
    exits: Vec<(String, Direction, String)>,
    items: Vec<(String, Item)>,
    start: Option<String>,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a room.
    #[must_use]
    pub fn room(mut self, key: &str, description: &str) -> Self {
        self.rooms.push((key.to_string(), description.to_string()));
        self
    }

    /// Declares a one-way exit.
    #[must_use]
    pub fn exit(mut self, from: &str, direction: Direction, to: &str) -> Self {
        self.exits
            .push((from.to_string(), direction, to.to_string()));
        self
    }

    /// Places an item in a room.
    #[must_use]
    pub fn item(mut self, room: &str, item: Item) -> Self {
        self.items.push((room.to_string(), item));
        self
    }

    /// Sets the starting room. Defaults to the first declared room.
    #[must_use]
    pub fn start(mut self, key: &str) -> Self {
        self.start = Some(key.to_string());
        self
    }

    /// Resolves all keys and builds the world.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRoom`, `DuplicateExit`, or `UnknownRoom` for an
    /// inconsistent table, and an internal error if no room was declared.
    pub fn build(self) -> Result<World> {
        let mut rooms: Vec<Room> = Vec::with_capacity(self.rooms.len());
        let mut keys: HashMap<Arc<str>, RoomId> = HashMap::with_capacity(self.rooms.len());

        for (key, description) in &self.rooms {
            if keys.contains_key(key.as_str()) {
                return Err(Error::new(ErrorKind::DuplicateRoom(key.clone())));
            }
            let index = u32::try_from(rooms.len())
                .map_err(|_| Error::new(ErrorKind::Internal("too many rooms".to_string())))?;
            keys.insert(Arc::from(key.as_str()), RoomId::new(index));
            rooms.push(Room::new(key, description));
        }

        let resolve = |key: &str| keys.get(key).copied().ok_or_else(|| Error::unknown_room(key));

        for (from, direction, to) in &self.exits {
            let from_id = resolve(from.as_str())?;
            let to_id = resolve(to.as_str())?;
            let room = &mut rooms[from_id.index()];
            if room.has_exit(*direction) {
                return Err(Error::new(ErrorKind::DuplicateExit {
                    room: from.clone(),
                    direction: direction.to_string(),
                }));
            }
            *room = room.with_exit(*direction, to_id);
        }

        for (key, item) in self.items {
            let id = resolve(key.as_str())?;
            let room = &mut rooms[id.index()];
            *room = room.with_item(item);
        }

        let start = match &self.start {
            Some(key) => resolve(key.as_str())?,
            None if rooms.is_empty() => {
                return Err(Error::new(ErrorKind::Internal(
                    "world has no rooms".to_string(),
                )));
            }
            None => RoomId::new(0),
        };

        debug!("built world with {} rooms", rooms.len());

        Ok(World {
            rooms: rooms.into_iter().collect(),
            keys: Arc::new(keys),
            start,
        })
    }
}
