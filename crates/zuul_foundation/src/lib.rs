//! Core identifiers, weights, and error types for Zuul.
//!
//! This crate provides:
//! - [`RoomId`] - Stable index of a room in the world arena
//! - [`Weight`] - Item weight in grams
//! - [`Error`] - Error type whose kinds double as player-facing messages

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::{MAX_CARRY_WEIGHT, RoomId, Weight};
