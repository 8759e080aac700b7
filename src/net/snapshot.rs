//! State broadcast: the full snapshot the host sends after every
//! applied mutation.
//!
//! Snapshots are redacted: non-host participants see the deck only as a
//! count, never its contents, so a client cannot look ahead. Everything
//! else is replicated as-is; clients treat it as a read-only stale view.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::error::{SessionError, SessionResult};
use crate::catalog::CardInstance;
use crate::core::{ChallengeStatus, Phase, Player, PlayerId, Room, RoomId};

/// Replicated view of an open challenge window.
///
/// The wall-clock deadline is translated to a remaining duration so the
/// snapshot is meaningful on a machine with a different clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSnapshot {
    /// The proposed sentence, in order.
    pub meld: Vec<CardInstance>,

    /// Window status.
    pub status: ChallengeStatus,

    /// Who contested, once someone has.
    pub challenger: Option<PlayerId>,

    /// Votes cast so far, sorted by seat.
    pub votes: Vec<(PlayerId, bool)>,

    /// Milliseconds until the window resolves.
    pub remaining_ms: u64,
}

/// Full room snapshot broadcast host → all participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub room: RoomId,
    pub players: Vec<Player>,

    /// Deck size only; contents stay host-side.
    pub deck_count: usize,

    /// Most-recent-first.
    pub discard_pile: Vec<CardInstance>,

    pub current_turn: usize,
    pub phase: Phase,
    pub challenge: Option<ChallengeSnapshot>,
    pub locked: bool,
}

impl Snapshot {
    /// Capture the canonical room state, redacting the deck.
    #[must_use]
    pub fn capture(room: &Room, now: Instant) -> Self {
        let challenge = room.challenge.as_ref().map(|c| {
            let mut votes: Vec<(PlayerId, bool)> =
                c.votes.iter().map(|(&p, &v)| (p, v)).collect();
            votes.sort_by_key(|(p, _)| p.0);
            ChallengeSnapshot {
                meld: c.meld.clone(),
                status: c.status,
                challenger: c.challenger,
                votes,
                remaining_ms: c.deadline.saturating_duration_since(now).as_millis() as u64,
            }
        });

        Self {
            room: room.id,
            players: room.players.clone(),
            deck_count: room.draw_deck.len(),
            discard_pile: room.discard_pile.iter().copied().collect(),
            current_turn: room.current_turn,
            phase: room.phase,
            challenge,
            locked: room.locked,
        }
    }

    /// Encode for the wire.
    pub fn encode(&self) -> SessionResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| SessionError::Encode(e.to_string()))
    }

    /// Decode from the wire.
    pub fn decode(bytes: &[u8]) -> SessionResult<Self> {
        bincode::deserialize(bytes).map_err(|e| SessionError::Decode(e.to_string()))
    }
}
