//! Integration tests for the zuul_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Tokenization
//! - Command word lookup
//! - Full parser pipeline

mod parser_tests;
mod tokenizer_tests;
