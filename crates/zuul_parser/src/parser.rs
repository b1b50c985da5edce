//! Main parser pipeline.
//!
//! Orchestrates the flow from raw input line to [`Command`].

use log::trace;

use crate::command::Command;
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::CommandWords;

/// Parses player input into commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandParser {
    words: CommandWords,
}

impl CommandParser {
    /// Creates a parser over the standard command words.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: CommandWords::new(),
        }
    }

    /// Returns the command words this parser recognizes.
    #[must_use]
    pub const fn command_words(&self) -> &CommandWords {
        &self.words
    }

    /// Renders the list of valid command words.
    #[must_use]
    pub fn show_commands(&self) -> String {
        self.words.show_all()
    }

    /// Parses one line of input.
    ///
    /// Never fails: an empty line or an unrecognized first word yields an
    /// unknown command. Words after the second are ignored.
    #[must_use]
    pub fn parse(&self, input: &str) -> Command {
        let tokens = InputTokenizer::tokenize(input);
        trace!("tokens: {tokens:?}");

        let mut words = tokens.iter().filter_map(InputToken::as_word);
        let first = words.next();
        let second = words.next().map(str::to_string);

        let verb = first.and_then(|word| self.words.lookup(word));
        Command::new(verb, second)
    }
}
