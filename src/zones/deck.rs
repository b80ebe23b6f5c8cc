//! The deck: the shuffled working subset of the catalog for one session.
//!
//! The deck holds references into the `Catalog`, never copies. Rounds read
//! the front card with `draw` and remove cards with `consume`; consuming more
//! cards than remain empties the deck instead of failing.

use im::Vector;
use tracing::debug;

use crate::cards::{Card, CardId, Catalog};
use crate::core::rng::GameRng;

/// Ordered stack of cards still to be played, front first.
///
/// Uses an `im` vector so snapshots of the remaining cards are O(1).
///
/// ```
/// use just_one::cards::{Card, CardId, Catalog};
/// use just_one::core::GameRng;
/// use just_one::zones::Deck;
///
/// let cards = (1..=3)
///     .map(|i| Card::new(CardId::new(i), ["a", "b", "c", "d", "e"]).unwrap())
///     .collect();
/// let catalog = Catalog::new(cards).unwrap();
///
/// let mut deck = Deck::shuffled(&catalog, &mut GameRng::new(1), None);
/// assert_eq!(deck.len(), 3);
///
/// assert_eq!(deck.consume(2), 2);
/// assert_eq!(deck.consume(2), 1);
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck<'c> {
    cards: Vector<&'c Card>,
    played: Vec<CardId>,
}

impl<'c> Deck<'c> {
    /// Shuffle the whole catalog and keep at most `limit` cards.
    #[must_use]
    pub fn shuffled(catalog: &'c Catalog, rng: &mut GameRng, limit: Option<usize>) -> Self {
        let mut cards: Vec<&'c Card> = catalog.iter().collect();
        rng.shuffle(&mut cards);
        if let Some(limit) = limit {
            cards.truncate(limit);
        }
        debug!(size = cards.len(), catalog = catalog.len(), "shuffled deck");
        Self::from_cards(cards)
    }

    /// Build a deck in exactly the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = &'c Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            played: Vec::new(),
        }
    }

    /// The front card, without removing it.
    #[must_use]
    pub fn draw(&self) -> Option<&'c Card> {
        self.cards.front().copied()
    }

    /// Remove up to `n` cards from the front. Returns how many were removed.
    pub fn consume(&mut self, n: usize) -> usize {
        let take = n.min(self.cards.len());
        for _ in 0..take {
            if let Some(card) = self.cards.pop_front() {
                self.played.push(card.id());
            }
        }
        debug!(requested = n, removed = take, remaining = self.cards.len(), "consumed cards");
        take
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Snapshot of the remaining cards, front first.
    #[must_use]
    pub fn remaining(&self) -> Vector<&'c Card> {
        self.cards.clone()
    }

    /// Ids of every consumed card, in the order they left the deck.
    #[must_use]
    pub fn played(&self) -> &[CardId] {
        &self.played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: i64) -> Catalog {
        let cards = (1..=n)
            .map(|i| Card::new(CardId::new(i), ["a", "b", "c", "d", "e"]).unwrap())
            .collect();
        Catalog::new(cards).unwrap()
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let catalog = catalog(20);
        let deck = Deck::shuffled(&catalog, &mut GameRng::new(42), None);

        let mut ids: Vec<_> = deck.remaining().iter().map(|c| c.id().raw()).collect();
        assert_eq!(ids.len(), 20);
        assert_ne!(ids, (1..=20).collect::<Vec<_>>());
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let catalog = catalog(20);
        let a = Deck::shuffled(&catalog, &mut GameRng::new(5), None);
        let b = Deck::shuffled(&catalog, &mut GameRng::new(5), None);
        let ids = |d: &Deck<'_>| d.remaining().iter().map(|c| c.id()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_limit_truncates() {
        let catalog = catalog(20);
        let deck = Deck::shuffled(&catalog, &mut GameRng::new(1), Some(13));
        assert_eq!(deck.len(), 13);
    }

    #[test]
    fn test_limit_larger_than_catalog() {
        let catalog = catalog(4);
        let deck = Deck::shuffled(&catalog, &mut GameRng::new(1), Some(13));
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_draw_does_not_mutate() {
        let catalog = catalog(3);
        let deck = Deck::from_cards(catalog.iter());

        assert_eq!(deck.draw().unwrap().id(), CardId::new(1));
        assert_eq!(deck.draw().unwrap().id(), CardId::new(1));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_consume_records_history() {
        let catalog = catalog(3);
        let mut deck = Deck::from_cards(catalog.iter());

        deck.consume(1);
        deck.consume(2);

        assert_eq!(deck.played(), &[CardId::new(1), CardId::new(2), CardId::new(3)]);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_consume_never_underflows() {
        let catalog = catalog(1);
        let mut deck = Deck::from_cards(catalog.iter());

        assert_eq!(deck.consume(2), 1);
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.consume(2), 0);
        assert!(deck.is_empty());
    }
}
