//! # just-one
//!
//! A cooperative word-guessing party game played at one terminal.
//!
//! Each round one player, the guesser, tries to find a secret word drawn
//! from a card. Everyone else privately writes a one-word clue; clues that
//! collide (ignoring case) are all thrown away before the guesser sees them.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: a `GameSession` owns its deck, roster and RNG.
//!    The terminal and the proposal log are injected capabilities.
//!
//! 2. **Validated data**: cards, word indices and player names are checked
//!    when built, so the round engine never sees malformed input.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, roster, RNG, session configuration
//! - `cards`: cards, the catalog and the CSV loader
//! - `zones`: the deck
//! - `rules`: proposals, duplicate elimination, scoring, the round engine
//! - `session`: the round loop and final tally
//! - `io`: console and proposal-log capabilities
//! - `error`: error types

pub mod cards;
pub mod core;
pub mod error;
pub mod io;
pub mod rules;
pub mod session;
pub mod zones;

pub use crate::core::{
    GameRng, Player, PlayerId, PlayerMap, Roster, RuleVariant, SessionConfig, SessionConfigBuilder,
};

pub use crate::cards::{Card, CardId, Catalog, WordIndex};

pub use crate::zones::Deck;

pub use crate::rules::{
    judge_guess, tier_message, GuessOutcome, Proposal, RoundEngine, RoundPhase, RoundReport,
};

pub use crate::session::{setup_roster, GameSession, SessionSummary};

pub use crate::io::{
    Console, FileProposalLog, MemoryProposalLog, ProposalSink, ScriptedConsole, TerminalConsole,
};

pub use crate::error::{CardError, GameError, LoadError, ValidationError};
