//! Tokenizer tests.
//!
//! Tests for converting raw input to token streams.

use zuul_parser::tokenizer::{InputToken, InputTokenizer};

fn words(input: &str) -> Vec<String> {
    InputTokenizer::tokenize(input)
        .iter()
        .filter_map(InputToken::as_word)
        .map(str::to_string)
        .collect()
}

#[test]
fn tokenize_simple_command() {
    let tokens = InputTokenizer::tokenize("take key");

    assert_eq!(tokens.len(), 3); // "take", "key", End
    assert!(matches!(&tokens[0], InputToken::Word(w) if w == "take"));
    assert!(matches!(&tokens[1], InputToken::Word(w) if w == "key"));
    assert!(matches!(&tokens[2], InputToken::End));
}

#[test]
fn tokenize_preserves_case() {
    assert_eq!(words("Go NORTH"), vec!["Go", "NORTH"]);
}

#[test]
fn tokenize_keeps_punctuation() {
    assert_eq!(words("take key!"), vec!["take", "key!"]);
}

#[test]
fn tokenize_empty_input() {
    let tokens = InputTokenizer::tokenize("");
    assert!(tokens.iter().all(|t| matches!(t, InputToken::End)));
}

#[test]
fn tokenize_whitespace_only() {
    let tokens = InputTokenizer::tokenize("   \t  ");
    assert!(tokens.iter().all(|t| matches!(t, InputToken::End)));
}

#[test]
fn tokenize_multiple_spaces() {
    assert_eq!(words("take   the   brass   lamp"), vec!["take", "the", "brass", "lamp"]);
}
