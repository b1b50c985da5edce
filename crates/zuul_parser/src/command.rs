//! Parsed commands.

use zuul_foundation::{Error, Result};

use crate::vocabulary::Verb;

/// A parsed (verb, optional argument) pair.
///
/// An unrecognized first word yields a command with no verb; it is still a
/// valid command, and the game answers it with a "don't know" message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    verb: Option<Verb>,
    second: Option<String>,
}

impl Command {
    /// Creates a command.
    #[must_use]
    pub fn new(verb: Option<Verb>, second: Option<String>) -> Self {
        Self { verb, second }
    }

    /// Creates a command with a verb and no argument.
    #[must_use]
    pub fn bare(verb: Verb) -> Self {
        Self::new(Some(verb), None)
    }

    /// Creates a command with a verb and an argument.
    #[must_use]
    pub fn with_argument(verb: Verb, second: impl Into<String>) -> Self {
        Self::new(Some(verb), Some(second.into()))
    }

    /// Creates an unknown command.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(None, None)
    }

    /// Returns the verb, or `None` if the first word was not recognized.
    #[must_use]
    pub const fn verb(&self) -> Option<Verb> {
        self.verb
    }

    /// Returns true if the first word was not recognized.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.verb.is_none()
    }

    /// Returns the second word, if any.
    #[must_use]
    pub fn second_word(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Returns true if a second word was given.
    #[must_use]
    pub const fn has_second_word(&self) -> bool {
        self.second.is_some()
    }

    /// Returns the argument a verb needs.
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` (e.g. "Take what?") if there is none.
    pub fn require_argument(&self, verb: Verb, object: &'static str) -> Result<&str> {
        self.second_word()
            .ok_or_else(|| Error::missing_argument(verb.title(), object))
    }

    /// Checks that an argument-less verb got no argument.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedArgument` (e.g. "Quit what?") if one was given.
    pub fn forbid_argument(&self, verb: Verb) -> Result<()> {
        if self.has_second_word() {
            return Err(Error::unexpected_argument(verb.title()));
        }
        Ok(())
    }
}
