//! Items, rooms, inventory, and world state for Zuul.
//!
//! This crate provides:
//! - [`Item`] - Immutable carryable object
//! - [`Room`] - Node of the world graph with exits and items
//! - [`Inventory`] - Weight-limited collection carried by the player
//! - [`World`] - Immutable room arena with structural sharing
//! - [`WorldBuilder`] - Table-driven world construction
//! - [`campus`] - The built-in university map

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod campus;
pub mod direction;
pub mod inventory;
pub mod item;
pub mod room;
pub mod world;

pub use direction::Direction;
pub use inventory::Inventory;
pub use item::Item;
pub use room::Room;
pub use world::{World, WorldBuilder};
