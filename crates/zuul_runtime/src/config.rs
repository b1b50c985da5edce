//! Game configuration.

use zuul_foundation::{MAX_CARRY_WEIGHT, Weight};

/// Settings for a game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Most weight the player may carry.
    pub max_carry_weight: Weight,

    /// Prompt shown before each command.
    pub prompt: String,

    /// Whether to print the welcome banner before the first room.
    pub show_banner: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_carry_weight: MAX_CARRY_WEIGHT,
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

impl GameConfig {
    /// Builder method to set the carry limit.
    #[must_use]
    pub fn with_max_carry_weight(mut self, weight: Weight) -> Self {
        self.max_carry_weight = weight;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the welcome banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}
