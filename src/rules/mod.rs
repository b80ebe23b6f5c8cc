//! Round rules: proposals, duplicate elimination, guess scoring and the
//! round engine that ties them together.

pub mod dedup;
pub mod engine;
pub mod proposal;
pub mod scoring;

pub use dedup::{unique_proposals, unique_words};
pub use engine::{RoundEngine, RoundPhase, RoundReport};
pub use proposal::{Proposal, ProposalSet};
pub use scoring::{judge_guess, tier_message, GuessOutcome, ScoreTier, SCORE_TIERS};
