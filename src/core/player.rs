//! Player identification and per-player game data.
//!
//! `PlayerId` is the seat index: seating order is fixed once the room
//! locks, and turn order is seat order. Only the turn engine mutates a
//! player's hand, melds, or score, and only while processing one action.

use serde::{Deserialize, Serialize};

use crate::catalog::CardInstance;

/// Player identifier: a 0-based seat index, stable for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a room with `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Hand, in hand order (indices are meaningful to actions).
    pub hand: Vec<CardInstance>,

    /// Committed melds, oldest first. Order within a meld is the
    /// sentence order and is never sorted.
    pub melds: Vec<Vec<CardInstance>>,

    /// Session score. Monotonically non-decreasing.
    pub score: u32,

    /// Whether this seat is the replication host.
    pub is_host: bool,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            melds: Vec::new(),
            score: 0,
            is_host,
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
