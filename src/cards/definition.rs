//! Card definitions.
//!
//! A `Card` is five candidate words under an id. Cards are immutable once
//! built, and construction is the only place their shape is checked: every
//! card in play has exactly five non-blank, trimmed words.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, ValidationError};

/// Number of words printed on every card.
pub const WORDS_PER_CARD: usize = 5;

/// Identifier of a card, as given by the card source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub i64);

impl CardId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// 1-based position of a word on a card, always in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordIndex(u8);

impl WordIndex {
    /// Build from a 1-based position.
    pub fn new(position: i64) -> Result<Self, ValidationError> {
        if (1..=WORDS_PER_CARD as i64).contains(&position) {
            Ok(Self(position as u8))
        } else {
            Err(ValidationError::OutOfRange(position))
        }
    }

    /// Build from a 0-based slot.
    ///
    /// Panics if `slot >= 5`.
    #[must_use]
    pub fn from_slot(slot: usize) -> Self {
        assert!(slot < WORDS_PER_CARD, "word slot {slot} out of range");
        Self(slot as u8 + 1)
    }

    /// Parse what a guesser typed: a number from 1 to 5, surrounding blanks ignored.
    ///
    /// ```
    /// use just_one::cards::WordIndex;
    ///
    /// assert_eq!(WordIndex::parse(" 3 ").unwrap().get(), 3);
    /// assert!(WordIndex::parse("six").is_err());
    /// assert!(WordIndex::parse("0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
        Self::new(n)
    }

    /// 1-based position.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based slot into the word list.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card of five candidate secret words.
///
/// ```
/// use just_one::cards::{Card, CardId, WordIndex};
///
/// let card = Card::new(CardId::new(1), ["apple", "river", "moon", "chair", "tiger"]).unwrap();
/// assert_eq!(card.word(WordIndex::new(2).unwrap()), "river");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    id: CardId,
    words: [String; WORDS_PER_CARD],
}

/// Unchecked wire shape of a `Card`; deserialization goes through `Card::new`.
#[derive(Deserialize)]
struct RawCard {
    id: CardId,
    words: [String; WORDS_PER_CARD],
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.id, raw.words)
    }
}

impl Card {
    /// Build a card, trimming each word. Fails naming the first blank slot.
    pub fn new<S: AsRef<str>>(id: CardId, words: [S; WORDS_PER_CARD]) -> Result<Self, CardError> {
        let mut trimmed: [String; WORDS_PER_CARD] = Default::default();
        for (slot, word) in words.iter().enumerate() {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(CardError::EmptyWord { slot: slot + 1 });
            }
            trimmed[slot] = word.to_string();
        }
        Ok(Self { id, words: trimmed })
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn words(&self) -> &[String; WORDS_PER_CARD] {
        &self.words
    }

    #[must_use]
    pub fn word(&self, index: WordIndex) -> &str {
        &self.words[index.slot()]
    }
}
