//! Session driver.
//!
//! A `GameSession` plays rounds until its deck runs out (or its round limit
//! is reached), rotating the guesser each round, then reports the final
//! scores with a closing message picked from the score tiers.

mod game;

pub use game::{setup_roster, GameSession, SessionSummary};
