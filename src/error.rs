//! Error taxonomy.
//!
//! - `CardError`: a card with a missing word.
//! - `LoadError`: the card source is missing, malformed or empty. Fatal.
//! - `ValidationError`: bad player input. Always answered with a re-prompt,
//!   never surfaced past the prompt loop that produced it.
//! - `GameError`: anything that ends a session early.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A card that cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    /// `slot` is 1-based, matching the `wordN` column names.
    #[error("word{slot} is empty")]
    EmptyWord { slot: usize },
}

/// Failure to produce a usable card catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("card source not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("card source unreadable: {0}")]
    Io(#[from] io::Error),

    #[error("card source is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid card on line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("card id {0} appears more than once")]
    DuplicateId(i64),

    #[error("no cards loaded, please check the card source")]
    Empty,
}

/// Rejected player input. The `Display` text is shown before re-prompting.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty. Please try again.")]
    EmptyName,

    #[error("Proposal cannot be empty. Please try again.")]
    EmptyProposal,

    #[error("'{0}' is not a number. Please enter a number from 1 to 5.")]
    NotANumber(String),

    #[error("{0} is out of range. Please enter a number from 1 to 5.")]
    OutOfRange(i64),
}

/// Errors that abort a session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open proposal log {}: {source}", .path.display())]
    ProposalLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid session configuration: {0}")]
    Config(String),
}

impl GameError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::Load(_) => 1,
            GameError::Terminal(_) | GameError::ProposalLog { .. } | GameError::Config(_) => 2,
        }
    }
}
