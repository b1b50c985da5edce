//! Integration tests for Error types
//!
//! Tests error construction, display, context, and classification.

use zuul_foundation::{Error, ErrorContext, ErrorKind, Weight};

// =============================================================================
// Player-facing Messages
// =============================================================================

#[test]
fn error_unknown_command_message() {
    let err = Error::unknown_command();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand));
    assert_eq!(err.to_string(), "I don't know what you mean...");
}

#[test]
fn error_missing_argument_messages() {
    assert_eq!(Error::missing_argument("Go", "where").to_string(), "Go where?");
    assert_eq!(Error::missing_argument("Take", "what").to_string(), "Take what?");
    assert_eq!(Error::missing_argument("Drop", "what").to_string(), "Drop what?");
}

#[test]
fn error_unexpected_argument_message() {
    assert_eq!(Error::unexpected_argument("Quit").to_string(), "Quit what?");
}

#[test]
fn error_not_found_messages() {
    assert_eq!(Error::no_exit("up").to_string(), "There is no door!");
    assert_eq!(Error::item_not_here("lamp").to_string(), "That item is not here.");
    assert_eq!(Error::not_carrying("lamp").to_string(), "You don't have that item.");
}

#[test]
fn error_not_found_keeps_name() {
    let err = Error::item_not_here("lamp");
    assert_eq!(err.kind, ErrorKind::ItemNotHere("lamp".to_string()));
}

#[test]
fn error_too_heavy_message() {
    let err = Error::too_heavy(Weight::grams(4990), Weight::grams(5000));
    let msg = err.to_string();
    let lines: Vec<_> = msg.lines().collect();
    assert_eq!(
        lines,
        vec![
            "That item is too heavy! You can't carry any more.",
            "Current weight: 4990g, Max: 5000g",
        ]
    );
}

// =============================================================================
// Error Classification
// =============================================================================

#[test]
fn gameplay_errors_are_user_errors() {
    let errors = [
        Error::unknown_command(),
        Error::missing_argument("Go", "where"),
        Error::unexpected_argument("Quit"),
        Error::no_exit("up"),
        Error::item_not_here("x"),
        Error::not_carrying("x"),
        Error::too_heavy(Weight::ZERO, Weight::ZERO),
    ];
    for err in errors {
        assert!(err.is_user_error(), "{err:?} should be a user error");
    }
}

#[test]
fn world_errors_are_not_user_errors() {
    assert!(!Error::unknown_room("attic").is_user_error());
    assert!(!Error::new(ErrorKind::DuplicateRoom("hall".into())).is_user_error());
    assert!(!Error::new(ErrorKind::Internal("oops".into())).is_user_error());
}

#[test]
fn world_error_display() {
    let err = Error::new(ErrorKind::DuplicateExit {
        room: "hall".to_string(),
        direction: "north".to_string(),
    });
    assert_eq!(err.to_string(), "duplicate exit north in room hall");
    assert_eq!(Error::unknown_room("attic").to_string(), "unknown room: attic");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_does_not_change_message() {
    let err = Error::no_exit("up").with_context(ErrorContext::new().with_command("go up"));
    assert_eq!(err.to_string(), "There is no door!");
    assert!(err.context.is_some());
}

#[test]
fn context_display_variants() {
    assert_eq!(ErrorContext::new().to_string(), "");
    assert_eq!(ErrorContext::new().with_room("pub").to_string(), "in pub");
    assert_eq!(ErrorContext::new().with_command("look").to_string(), "`look`");
}
