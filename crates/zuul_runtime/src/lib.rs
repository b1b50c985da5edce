//! Game loop, REPL, and CLI for Zuul.
//!
//! This crate provides:
//! - [`Game`] - World state, inventory, and command handlers
//! - [`Repl`] - Interactive read-process-respond loop
//! - [`GameConfig`] - Carry limit, prompt, and banner settings
//! - [`LineEditor`] - Swappable line input (rustyline or plain stdin)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod game;
pub mod repl;

pub use config::GameConfig;
pub use editor::{LineEditor, PlainEditor, ReadResult, RustylineEditor};
pub use game::{Game, GameState, Response};
pub use repl::Repl;
