//! Card system: definitions, the catalog and the CSV loader.
//!
//! ## Key Types
//!
//! - `CardId`: identifier from the card source
//! - `WordIndex`: validated 1-based word position (1..=5)
//! - `Card`: five trimmed, non-blank candidate words
//! - `Catalog`: every loaded card, looked up by id

pub mod catalog;
pub mod definition;
pub mod loader;

pub use catalog::Catalog;
pub use definition::{Card, CardId, WordIndex, WORDS_PER_CARD};
pub use loader::{load_from_path, load_from_reader, locate_card_source};
