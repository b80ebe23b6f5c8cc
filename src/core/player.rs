//! Players and the roster.
//!
//! ## PlayerId
//!
//! Seat index into the roster, 0-based, supporting up to 255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Roster
//!
//! The ordered list of named players for a session. Seat order drives both
//! guesser rotation and the order clue-givers are asked for proposals.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::ValidationError;

/// Player identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A named participant and the words they have guessed correctly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    pub score: u32,
}

impl Player {
    /// Create a player, trimming the name. Blank names are rejected.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            score: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Seat-ordered list of players for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: PlayerMap<Player>,
}

impl Roster {
    /// Build a roster from players in seat order.
    ///
    /// Panics on an empty list; session setup never produces one.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: PlayerMap::from_vec(players),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// Round-robin guesser: round `r` (1-based) goes to seat `(r - 1) mod n`.
    #[must_use]
    pub fn guesser_for_round(&self, round: u32) -> PlayerId {
        debug_assert!(round >= 1, "rounds are numbered from 1");
        let seat = (round.saturating_sub(1) as usize) % self.len();
        PlayerId(seat as u8)
    }

    /// Everyone except the guesser, in seat order.
    pub fn clue_givers(&self, guesser: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.player_ids().filter(move |&p| p != guesser)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Sum of every player's score.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.players.iter().map(|(_, p)| p.score).sum()
    }
}
