//! World of Zuul - a small text adventure on a fixed campus map.
//!
//! This crate re-exports all layers of the game for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: zuul_runtime    - Game, REPL loop, line editor, CLI
//! Layer 2: zuul_parser     - Tokenizer, command words, commands
//! Layer 1: zuul_storage    - Items, rooms, inventory, world graph
//! Layer 0: zuul_foundation - RoomId, Weight, Error
//! ```

pub use zuul_foundation as foundation;
pub use zuul_parser as parser;
pub use zuul_runtime as runtime;
pub use zuul_storage as storage;
