//! Parser pipeline tests.

use proptest::prelude::*;
use zuul_parser::{Command, CommandParser, Verb};

#[test]
fn parse_each_verb() {
    let parser = CommandParser::new();
    assert_eq!(parser.parse("help"), Command::bare(Verb::Help));
    assert_eq!(parser.parse("look"), Command::bare(Verb::Look));
    assert_eq!(parser.parse("inventory"), Command::bare(Verb::Inventory));
    assert_eq!(parser.parse("quit"), Command::bare(Verb::Quit));
    assert_eq!(parser.parse("go east"), Command::with_argument(Verb::Go, "east"));
    assert_eq!(parser.parse("take map"), Command::with_argument(Verb::Take, "map"));
    assert_eq!(parser.parse("drop map"), Command::with_argument(Verb::Drop, "map"));
}

#[test]
fn second_word_is_opaque() {
    let cmd = CommandParser::new().parse("go banana");
    assert_eq!(cmd.verb(), Some(Verb::Go));
    assert_eq!(cmd.second_word(), Some("banana"));
}

#[test]
fn third_word_is_ignored() {
    let cmd = CommandParser::new().parse("quit the game");
    assert_eq!(cmd, Command::with_argument(Verb::Quit, "the"));
}

#[test]
fn show_commands_lists_whitelist() {
    assert_eq!(
        CommandParser::new().show_commands(),
        "go  quit  help  look  take  drop  inventory"
    );
}

proptest! {
    #[test]
    fn unknown_first_word_is_unknown(word in "[A-Z][a-z]{0,8}") {
        // Capitalized words never match the lowercase whitelist
        prop_assert!(CommandParser::new().parse(&word).is_unknown());
    }

    #[test]
    fn never_more_than_two_words(input in "[a-z]{1,5}( [a-z]{1,5}){0,6}") {
        let cmd = CommandParser::new().parse(&input);
        let expected = input.split(' ').nth(1);
        prop_assert_eq!(cmd.second_word(), expected);
    }
}
