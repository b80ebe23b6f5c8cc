//! Guess evaluation and final score tiers.

use serde::{Deserialize, Serialize};

/// How a guess resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    Passed,
}

/// Judge a guess against the secret word.
///
/// Matching is a case-insensitive exact match of the trimmed guess. When
/// `pass_token` is given and the guess is that token (any case) and not the
/// secret word itself, the guess is a pass.
///
/// ```
/// use just_one::rules::{judge_guess, GuessOutcome};
///
/// assert_eq!(judge_guess("Apple", "apple", None), GuessOutcome::Correct);
/// assert_eq!(judge_guess("apples", "apple", None), GuessOutcome::Incorrect);
/// assert_eq!(judge_guess("PASS", "apple", Some("pass")), GuessOutcome::Passed);
/// ```
#[must_use]
pub fn judge_guess(guess: &str, secret: &str, pass_token: Option<&str>) -> GuessOutcome {
    let guess = guess.trim().to_lowercase();
    if guess == secret.to_lowercase() {
        return GuessOutcome::Correct;
    }
    match pass_token {
        Some(token) if guess == token.trim().to_lowercase() => GuessOutcome::Passed,
        _ => GuessOutcome::Incorrect,
    }
}

/// An inclusive score range and its closing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreTier {
    pub min: i64,
    pub max: i64,
    pub message: &'static str,
}

/// Closing messages, highest range first. Ranges are inclusive and disjoint.
pub const SCORE_TIERS: &[ScoreTier] = &[
    ScoreTier { min: 13, max: 13, message: "Perfect score! Can you do it again?" },
    ScoreTier { min: 12, max: 12, message: "Incredible! Your friends must be impressed!" },
    ScoreTier { min: 11, max: 11, message: "Awesome! That's a score worth celebrating!" },
    ScoreTier { min: 9, max: 10, message: "Wow, not bad at all!" },
    ScoreTier { min: 7, max: 8, message: "You're in the average. Can you do better?" },
    ScoreTier { min: 4, max: 6, message: "That's a good start. Try again!" },
    ScoreTier { min: 0, max: 3, message: "Try again, and again, and again." },
];

/// Message for scores outside every tier.
pub const UNEXPECTED_SCORE_MESSAGE: &str = "Unexpected score. Something went wrong with the count.";

/// Closing message for a final team score.
#[must_use]
pub fn tier_message(score: i64) -> &'static str {
    SCORE_TIERS
        .iter()
        .find(|tier| (tier.min..=tier.max).contains(&score))
        .map_or(UNEXPECTED_SCORE_MESSAGE, |tier| tier.message)
}
