//! Clue proposals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, WordIndex};

/// One clue-giver's submission for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub player_name: String,
    pub round: u32,
    pub card: CardId,
    pub word_index: WordIndex,
    /// Trimmed, never empty.
    pub text: String,
}

/// Proposals collected in one round. Five players give four clues.
pub type ProposalSet = SmallVec<[Proposal; 4]>;

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {} - {}: {} (word {}, card {})",
            self.round,
            self.player_name,
            self.text,
            self.word_index,
            self.card.raw()
        )
    }
}
