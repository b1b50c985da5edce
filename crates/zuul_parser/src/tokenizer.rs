//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A word, exactly as typed
    Word(String),
    /// End of input
    End,
}

impl InputToken {
    /// Returns the word text, or `None` for [`InputToken::End`].
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            Self::End => None,
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Splits on any whitespace
    /// - Keeps case and punctuation: `"North"` and `"north"` are different words
    /// - Always ends with [`InputToken::End`]
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens: Vec<InputToken> = input
            .split_whitespace()
            .map(|word| InputToken::Word(word.to_string()))
            .collect();
        tokens.push(InputToken::End);
        tokens
    }
}
