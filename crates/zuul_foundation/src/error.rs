//! Error types for Zuul.
//!
//! Uses `thiserror` for ergonomic error definition. Gameplay kinds render as
//! the exact text shown to the player, so a rejected command is reported by
//! printing the error.

use std::fmt;

use thiserror::Error;

use crate::types::Weight;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Zuul operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command() -> Self {
        Self::new(ErrorKind::UnknownCommand)
    }

    /// Creates a missing argument error, e.g. `("Go", "where")`.
    #[must_use]
    pub fn missing_argument(verb: impl Into<String>, object: &'static str) -> Self {
        Self::new(ErrorKind::MissingArgument {
            verb: verb.into(),
            object,
        })
    }

    /// Creates an unexpected argument error for an argument-less verb.
    #[must_use]
    pub fn unexpected_argument(verb: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedArgument { verb: verb.into() })
    }

    /// Creates a missing exit error.
    #[must_use]
    pub fn no_exit(direction: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoExit(direction.into()))
    }

    /// Creates an error for an item absent from the current room.
    #[must_use]
    pub fn item_not_here(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotHere(name.into()))
    }

    /// Creates an error for an item absent from the inventory.
    #[must_use]
    pub fn not_carrying(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotCarrying(name.into()))
    }

    /// Creates a carry limit error.
    #[must_use]
    pub fn too_heavy(current: Weight, max: Weight) -> Self {
        Self::new(ErrorKind::TooHeavy { current, max })
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRoom(key.into()))
    }

    /// Returns true if this error was caused by player input.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        self.kind.is_user_error()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The first word is not a command word.
    #[error("I don't know what you mean...")]
    UnknownCommand,

    /// A verb that needs an object was given none.
    #[error("{verb} {object}?")]
    MissingArgument {
        /// Capitalized verb, e.g. `Go`.
        verb: String,
        /// Question word, e.g. `where`.
        object: &'static str,
    },

    /// An argument-less verb was given an argument.
    #[error("{verb} what?")]
    UnexpectedArgument {
        /// Capitalized verb, e.g. `Quit`.
        verb: String,
    },

    /// The current room has no exit in that direction.
    #[error("There is no door!")]
    NoExit(String),

    /// No item of that name in the current room.
    #[error("That item is not here.")]
    ItemNotHere(String),

    /// No item of that name in the inventory.
    #[error("You don't have that item.")]
    NotCarrying(String),

    /// Taking the item would exceed the carry limit.
    #[error("That item is too heavy! You can't carry any more.\nCurrent weight: {current}, Max: {max}")]
    TooHeavy {
        /// Weight carried before the attempt.
        current: Weight,
        /// Carry limit.
        max: Weight,
    },

    /// A world table references a room key that was never declared.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// A world table declares the same room key twice.
    #[error("duplicate room: {0}")]
    DuplicateRoom(String),

    /// A world table declares the same direction twice on one room.
    #[error("duplicate exit {direction} in room {room}")]
    DuplicateExit {
        /// Room key.
        room: String,
        /// Direction name.
        direction: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for kinds caused by player input.
    ///
    /// These are always recoverable: the game reports them and keeps running.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand
                | Self::MissingArgument { .. }
                | Self::UnexpectedArgument { .. }
                | Self::NoExit(_)
                | Self::ItemNotHere(_)
                | Self::NotCarrying(_)
                | Self::TooHeavy { .. }
        )
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The raw command line being processed.
    pub command: Option<String>,
    /// Key of the room the player was in.
    pub room: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command line.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the room key.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.command, &self.room) {
            (Some(command), Some(room)) => write!(f, "`{command}` in {room}"),
            (Some(command), None) => write!(f, "`{command}`"),
            (None, Some(room)) => write!(f, "in {room}"),
            (None, None) => Ok(()),
        }
    }
}
