//! Rules configuration.
//!
//! The numeric knobs of game setup and end-of-game checks. The defaults are
//! the standard rules; the builder methods exist for test fixtures and
//! variant experiments. A `RulesConfig` is stored inside every `GameState`
//! so that saved games carry the rules they were started with.

use serde::{Deserialize, Serialize};

/// Setup and victory parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Coins each city starts with.
    pub starting_coins: u32,

    /// Progress tokens placed on the board at setup.
    pub board_progress_tokens: usize,

    /// Wonders dealt to each player at setup.
    pub wonders_per_player: usize,

    /// Wonders that can be built in one game across both cities.
    pub max_wonders: usize,

    /// Distinct science symbols needed for science supremacy.
    pub science_supremacy_symbols: usize,

    /// Base income for discarding a card (plus one per gold card).
    pub discard_base_income: u32,

    /// Cards removed unseen from each age deck before the structure is built.
    pub cards_removed_per_age: usize,

    /// Guild cards shuffled into the age III deck.
    pub guilds_in_play: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_coins: 7,
            board_progress_tokens: 5,
            wonders_per_player: 4,
            max_wonders: 7,
            science_supremacy_symbols: 6,
            discard_base_income: 2,
            cards_removed_per_age: 3,
            guilds_in_play: 3,
        }
    }
}

impl RulesConfig {
    /// Set the starting coins.
    #[must_use]
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Set the number of progress tokens on the board.
    #[must_use]
    pub fn with_board_progress_tokens(mut self, count: usize) -> Self {
        self.board_progress_tokens = count;
        self
    }

    /// Set the science supremacy threshold.
    #[must_use]
    pub fn with_science_supremacy_symbols(mut self, count: usize) -> Self {
        self.science_supremacy_symbols = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.starting_coins, 7);
        assert_eq!(config.board_progress_tokens, 5);
        assert_eq!(config.max_wonders, 7);
        assert_eq!(config.science_supremacy_symbols, 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_starting_coins(20)
            .with_board_progress_tokens(2)
            .with_science_supremacy_symbols(4);

        assert_eq!(config.starting_coins, 20);
        assert_eq!(config.board_progress_tokens, 2);
        assert_eq!(config.science_supremacy_symbols, 4);
        assert_eq!(config.wonders_per_player, 4);
    }

    #[test]
    fn test_config_serde() {
        let config = RulesConfig::default().with_starting_coins(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
