//! Carryable items.

use std::fmt;
use std::sync::Arc;

use zuul_foundation::Weight;

/// An object the player can pick up.
///
/// Items are immutable. Cloning is cheap since the text is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: Arc<str>,
    description: Arc<str>,
    weight: Weight,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: &str, description: &str, weight: Weight) -> Self {
        Self {
            name: Arc::from(name),
            description: Arc::from(description),
            weight,
        }
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the item's weight.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns true if `name` refers to this item, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.weight, self.description)
    }
}
