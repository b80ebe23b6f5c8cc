//! Session configuration.
//!
//! A session is configured once at startup by a `SessionConfig`:
//! - `RuleVariant`: how the secret word is chosen, whether passing is
//!   allowed, and how many cards a wrong guess costs
//! - deck and round limits
//! - player count and RNG seed
//!
//! Presets cover the two rule sets; the builder adjusts individual knobs.
//!
//! ```
//! use just_one::core::{RuleVariant, SessionConfig};
//!
//! let config = SessionConfig::builder()
//!     .variant(RuleVariant::Basic)
//!     .round_limit(3)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.round_limit, Some(3));
//! assert!(!config.allows_pass());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default number of players at the table.
pub const DEFAULT_PLAYER_COUNT: usize = 5;

/// Cards kept from the shuffled catalog in the advanced game.
pub const ADVANCED_DECK_SIZE: usize = 13;

/// Rounds played in the basic game.
pub const BASIC_ROUND_LIMIT: usize = 10;

/// Token a guesser types to skip a card in the advanced game.
pub const DEFAULT_PASS_TOKEN: &str = "pass";

/// Rule set for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleVariant {
    /// Random secret word, no passing, one card per round.
    Basic,
    /// Guesser picks the word index, may pass, wrong guesses cost two cards.
    Advanced,
}

/// Complete configuration for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub variant: RuleVariant,

    /// Number of players prompted for at setup.
    pub player_count: usize,

    /// Truncate the shuffled deck to this many cards. `None` keeps the whole catalog.
    pub deck_limit: Option<usize>,

    /// Stop after this many rounds even if cards remain. `None` plays until the deck is empty.
    pub round_limit: Option<usize>,

    /// Pass sentinel, compared case-insensitively. Only honoured in `Advanced`.
    pub pass_token: String,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Start from the advanced preset.
    #[must_use]
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Random word, ten rounds at most, one card per round.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            variant: RuleVariant::Basic,
            player_count: DEFAULT_PLAYER_COUNT,
            deck_limit: None,
            round_limit: Some(BASIC_ROUND_LIMIT),
            pass_token: DEFAULT_PASS_TOKEN.to_string(),
            seed: None,
        }
    }

    /// Guesser-chosen word, thirteen cards, play until the deck is empty.
    #[must_use]
    pub fn advanced() -> Self {
        Self {
            variant: RuleVariant::Advanced,
            player_count: DEFAULT_PLAYER_COUNT,
            deck_limit: Some(ADVANCED_DECK_SIZE),
            round_limit: None,
            pass_token: DEFAULT_PASS_TOKEN.to_string(),
            seed: None,
        }
    }

    /// Whether the guesser may pass.
    #[must_use]
    pub fn allows_pass(&self) -> bool {
        self.variant == RuleVariant::Advanced
    }

    /// Cards consumed by a wrong guess (before clamping to what's left).
    #[must_use]
    pub fn wrong_guess_penalty(&self) -> usize {
        match self.variant {
            RuleVariant::Basic => 1,
            RuleVariant::Advanced => 2,
        }
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count < 2 {
            return Err(GameError::Config(format!(
                "at least 2 players are needed, got {}",
                self.player_count
            )));
        }
        if self.player_count > 255 {
            return Err(GameError::Config("at most 255 players are supported".to_string()));
        }
        if self.round_limit == Some(0) {
            return Err(GameError::Config("round limit must be at least 1".to_string()));
        }
        if self.deck_limit == Some(0) {
            return Err(GameError::Config("deck limit must be at least 1".to_string()));
        }
        if self.pass_token.trim().is_empty() {
            return Err(GameError::Config("pass token cannot be blank".to_string()));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::advanced()
    }
}

/// Builder for `SessionConfig`.
#[derive(Clone, Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Switch rule set. Resets the deck and round limits to that variant's preset.
    #[must_use]
    pub fn variant(mut self, variant: RuleVariant) -> Self {
        let preset = match variant {
            RuleVariant::Basic => SessionConfig::basic(),
            RuleVariant::Advanced => SessionConfig::advanced(),
        };
        self.config.variant = variant;
        self.config.deck_limit = preset.deck_limit;
        self.config.round_limit = preset.round_limit;
        self
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    #[must_use]
    pub fn deck_limit(mut self, limit: usize) -> Self {
        self.config.deck_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn unlimited_deck(mut self) -> Self {
        self.config.deck_limit = None;
        self
    }

    #[must_use]
    pub fn round_limit(mut self, limit: usize) -> Self {
        self.config.round_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn pass_token(mut self, token: impl Into<String>) -> Self {
        self.config.pass_token = token.into();
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SessionConfig, GameError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let basic = SessionConfig::basic();
        assert_eq!(basic.round_limit, Some(BASIC_ROUND_LIMIT));
        assert_eq!(basic.deck_limit, None);
        assert_eq!(basic.wrong_guess_penalty(), 1);
        assert!(!basic.allows_pass());

        let advanced = SessionConfig::advanced();
        assert_eq!(advanced.deck_limit, Some(ADVANCED_DECK_SIZE));
        assert_eq!(advanced.round_limit, None);
        assert_eq!(advanced.wrong_guess_penalty(), 2);
        assert!(advanced.allows_pass());
    }

    #[test]
    fn test_builder_variant_then_override() {
        let config = SessionConfig::builder()
            .variant(RuleVariant::Basic)
            .round_limit(4)
            .player_count(3)
            .build()
            .unwrap();

        assert_eq!(config.variant, RuleVariant::Basic);
        assert_eq!(config.round_limit, Some(4));
        assert_eq!(config.player_count, 3);
    }

    #[test]
    fn test_rejects_single_player() {
        let err = SessionConfig::builder().player_count(1).build().unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_round_limit() {
        assert!(SessionConfig::builder().round_limit(0).build().is_err());
    }

    #[test]
    fn test_rejects_blank_pass_token() {
        assert!(SessionConfig::builder().pass_token("  ").build().is_err());
    }
}
