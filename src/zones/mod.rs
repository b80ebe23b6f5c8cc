//! Card zones. A session has a single one: the deck being played.

pub mod deck;

pub use deck::Deck;
