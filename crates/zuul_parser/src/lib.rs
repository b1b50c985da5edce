//! Command parser for Zuul.
//!
//! Turns a line of player input like `"take key"` into a [`Command`].
//!
//! # Architecture
//!
//! ```text
//! "take key please"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["take", "key", "please"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND WORDS   │  → Verb::Take (or unknown)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command { verb: Take, second: "key" }
//! └─────────────────┘
//! ```
//!
//! Only the first two words matter; the rest are dropped. The second word
//! is not checked here, since only the handler knows whether it names a
//! direction or an item.
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into words
//! - [`vocabulary`] - The fixed set of command words
//! - [`command`] - Parsed (verb, argument) pairs
//! - [`parser`] - Pipeline from line to command

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::Command;
pub use parser::CommandParser;
pub use vocabulary::{CommandWords, Verb};
