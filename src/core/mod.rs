//! Core session types: players, roster, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{RuleVariant, SessionConfig, SessionConfigBuilder};
pub use player::{Player, PlayerId, PlayerMap, Roster};
pub use rng::GameRng;
