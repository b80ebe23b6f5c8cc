//! Duplicate clue elimination.
//!
//! Clues are compared lowercased. A clue survives only if no other clue in
//! the round lowercases to the same string; when two or more collide, every
//! one of them is removed, not just the extras.

use rustc_hash::FxHashMap;

use super::proposal::Proposal;

/// Normalized form used for clue comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Positions of the items whose normalized form occurs exactly once,
/// in input order.
#[must_use]
pub fn unique_positions<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    let normalized: Vec<String> = items.iter().map(|s| normalize(s.as_ref())).collect();

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for word in &normalized {
        *counts.entry(word.as_str()).or_default() += 1;
    }

    normalized
        .iter()
        .enumerate()
        .filter(|(_, word)| counts[word.as_str()] == 1)
        .map(|(i, _)| i)
        .collect()
}

/// Words that no other word duplicates, original spelling kept.
///
/// ```
/// use just_one::rules::dedup::unique_words;
///
/// assert_eq!(unique_words(&["Cat", "dog", "CAT"]), vec!["dog"]);
/// ```
#[must_use]
pub fn unique_words<S: AsRef<str>>(items: &[S]) -> Vec<&str> {
    unique_positions(items)
        .into_iter()
        .map(|i| items[i].as_ref())
        .collect()
}

/// Proposals that survive elimination, in collection order.
#[must_use]
pub fn unique_proposals(proposals: &[Proposal]) -> Vec<&Proposal> {
    let texts: Vec<&str> = proposals.iter().map(|p| p.text.as_str()).collect();
    unique_positions(&texts)
        .into_iter()
        .map(|i| &proposals[i])
        .collect()
}
