//! The fixed set of command words.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A recognized command verb.
///
/// Parsing is an exact, case-sensitive match: `"go"` is a verb, `"Go"` is not.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Leave the game.
    Quit,
    /// Show help.
    Help,
    /// Describe the current room.
    Look,
    /// Pick up an item.
    Take,
    /// Put down a carried item.
    Drop,
    /// List carried items.
    Inventory,
}

impl Verb {
    /// Returns the command word, e.g. `"go"`.
    #[must_use]
    pub fn word(self) -> &'static str {
        self.into()
    }

    /// Returns the capitalized word used in prompts, e.g. `"Go"`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Quit => "Quit",
            Self::Help => "Help",
            Self::Look => "Look",
            Self::Take => "Take",
            Self::Drop => "Drop",
            Self::Inventory => "Inventory",
        }
    }
}

/// The whitelist of command words, in the order they are listed to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandWords;

impl CommandWords {
    /// Creates the command word list.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Looks up a verb by exact word.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Verb> {
        word.parse().ok()
    }

    /// Returns true if `word` is a command word.
    #[must_use]
    pub fn is_command(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Iterates over all verbs.
    pub fn verbs(&self) -> impl Iterator<Item = Verb> {
        Verb::iter()
    }

    /// Renders all command words on one line, two spaces apart.
    #[must_use]
    pub fn show_all(&self) -> String {
        self.verbs().map(Verb::word).collect::<Vec<_>>().join("  ")
    }
}
