//! Card catalog for the session.
//!
//! The `Catalog` owns every loaded card. Decks borrow from it, so it must
//! outlive the session that plays from it.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::error::LoadError;

/// Immutable, id-indexed set of cards in source order.
///
/// ```
/// use just_one::cards::{Card, CardId, Catalog};
///
/// let card = Card::new(CardId::new(1), ["a", "b", "c", "d", "e"]).unwrap();
/// let catalog = Catalog::new(vec![card]).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get(CardId::new(1)).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog. Empty input and repeated ids are load errors.
    pub fn new(cards: Vec<Card>) -> Result<Self, LoadError> {
        if cards.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut by_id = FxHashMap::default();
        for (position, card) in cards.iter().enumerate() {
            if by_id.insert(card.id(), position).is_some() {
                return Err(LoadError::DuplicateId(card.id().raw()));
            }
        }

        Ok(Self { cards, by_id })
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
