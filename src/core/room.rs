//! Room state: the unit of replication.
//!
//! The room is the single canonical aggregate the host owns. Everything
//! in it is mutated only by the turn engine while processing one action;
//! remote participants only ever see redacted snapshots of it.
//!
//! ## Card conservation
//!
//! Every card instance lives in exactly one of: a hand, a committed
//! meld, the draw deck, the discard pile, or the pending challenge
//! proposal. `check_integrity` verifies this after every mutation;
//! a violation is the one fatal condition in the system.

use std::collections::VecDeque;
use std::time::Instant;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::ActionRecord;
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::catalog::{CardInstance, InstanceId, TokenId};

/// Room identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Meld,
    Challenge,
    Discard,
}

/// Status of an open challenge window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    /// Just proposed; any non-acting player may contest.
    Pending,
    /// Contested; every player may cast one vote.
    Challenged,
}

/// An open challenge window over a proposed meld.
///
/// Exists iff `phase == Challenge`. The deadline is plain data: the host
/// compares it against the clock on every pump; nothing here owns a
/// timer.
#[derive(Clone, Debug)]
pub struct ChallengeState {
    /// The proposed sentence, in selection order.
    pub meld: Vec<CardInstance>,

    /// Hand cards provisionally removed for the proposal, recorded as
    /// `(original hand index, card)` so a rejected meld restores the
    /// exact prior hand layout.
    pub removed: Vec<(usize, CardInstance)>,

    /// Who contested, once someone has.
    pub challenger: Option<PlayerId>,

    /// Window status.
    pub status: ChallengeStatus,

    /// When the window resolves.
    pub deadline: Instant,

    /// Votes cast so far; a later vote from the same player overwrites.
    pub votes: FxHashMap<PlayerId, bool>,
}

/// Structural corruption of canonical state.
///
/// Should never occur; when it does, the room is halted rather than
/// silently repaired.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("card instance {0} present in more than one place")]
    DuplicateInstance(InstanceId),

    #[error("current turn {turn} out of range for {players} players")]
    TurnOutOfRange { turn: usize, players: usize },

    #[error("challenge state inconsistent with phase")]
    PhaseChallengeMismatch,
}

/// Canonical room state.
#[derive(Clone, Debug)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,

    /// Seated players; vector order is seating and turn order.
    pub players: Vec<Player>,

    /// Draw deck; front is the next card drawn.
    pub draw_deck: VecDeque<CardInstance>,

    /// Discard pile; front is the most recent discard.
    pub discard_pile: VecDeque<CardInstance>,

    /// Index into `players` of the seat whose turn it is.
    pub current_turn: usize,

    /// Current phase.
    pub phase: Phase,

    /// Open challenge window, iff `phase == Challenge`.
    pub challenge: Option<ChallengeState>,

    /// True once the lobby has locked and play has begun.
    pub locked: bool,

    /// Applied-action history.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG for shuffles and dealing.
    pub rng: GameRng,

    next_instance: u64,
}

impl Room {
    /// Create an empty, unlocked room.
    #[must_use]
    pub fn new(id: RoomId, seed: u64) -> Self {
        Self {
            id,
            players: Vec::new(),
            draw_deck: VecDeque::new(),
            discard_pile: VecDeque::new(),
            current_turn: 0,
            phase: Phase::Draw,
            challenge: None,
            locked: false,
            history: Vector::new(),
            rng: GameRng::new(seed),
            next_instance: 1,
        }
    }

    /// Seat a player. Only valid before the room locks.
    pub fn add_player(&mut self, name: impl Into<String>, is_host: bool) -> PlayerId {
        assert!(!self.locked, "cannot seat players in a locked room");
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name, is_host));
        id
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_turn]
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Get a mutable player by ID.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Mint a fresh card instance of `token`.
    ///
    /// Instance ids are monotone and never reused within a session.
    pub fn mint(&mut self, token: TokenId) -> CardInstance {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        CardInstance::new(id, token)
    }

    /// Advance the turn pointer to the next seat.
    ///
    /// Single-seat rooms never advance.
    pub fn advance_turn(&mut self) {
        if self.players.len() > 1 {
            self.current_turn = (self.current_turn + 1) % self.players.len();
        }
    }

    /// Record an applied action.
    pub fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Every card instance currently tracked by the room, across all
    /// pools.
    pub fn all_instances(&self) -> impl Iterator<Item = &CardInstance> {
        let in_players = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().chain(p.melds.iter().flatten()));
        let in_challenge = self.challenge.iter().flat_map(|c| c.meld.iter());
        in_players
            .chain(self.draw_deck.iter())
            .chain(self.discard_pile.iter())
            .chain(in_challenge)
    }

    /// Verify the structural invariants of §3.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let mut seen: FxHashSet<InstanceId> = FxHashSet::default();
        for card in self.all_instances() {
            if !seen.insert(card.instance) {
                return Err(IntegrityError::DuplicateInstance(card.instance));
            }
        }

        if !self.players.is_empty() && self.current_turn >= self.players.len() {
            return Err(IntegrityError::TurnOutOfRange {
                turn: self.current_turn,
                players: self.players.len(),
            });
        }

        let challenge_open = self.challenge.is_some();
        if challenge_open != (self.phase == Phase::Challenge) {
            return Err(IntegrityError::PhaseChallengeMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;

    fn token(n: u32) -> TokenId {
        TokenId::new(n)
    }

    #[test]
    fn test_new_room() {
        let room = Room::new(RoomId::new(1), 42);
        assert_eq!(room.player_count(), 0);
        assert!(!room.locked);
        assert_eq!(room.phase, Phase::Draw);
        assert!(room.check_integrity().is_ok());
    }

    #[test]
    fn test_seating_order() {
        let mut room = Room::new(RoomId::new(1), 42);
        let a = room.add_player("Ana", true);
        let b = room.add_player("Bella", false);

        assert_eq!(a, PlayerId::new(0));
        assert_eq!(b, PlayerId::new(1));
        assert!(room.players[0].is_host);
        assert!(!room.players[1].is_host);
    }

    #[test]
    fn test_mint_never_collides() {
        let mut room = Room::new(RoomId::new(1), 42);
        let a = room.mint(token(0));
        let b = room.mint(token(0));

        assert_eq!(a.token, b.token);
        assert_ne!(a.instance, b.instance);
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut room = Room::new(RoomId::new(1), 42);
        room.add_player("Ana", true);
        room.add_player("Bella", false);
        room.add_player("Cleo", false);

        assert_eq!(room.current_turn, 0);
        room.advance_turn();
        assert_eq!(room.current_turn, 1);
        room.advance_turn();
        room.advance_turn();
        assert_eq!(room.current_turn, 0);
    }

    #[test]
    fn test_advance_turn_solo_is_noop() {
        let mut room = Room::new(RoomId::new(1), 42);
        room.add_player("Solo", true);
        room.advance_turn();
        assert_eq!(room.current_turn, 0);
    }

    #[test]
    fn test_integrity_detects_duplicate() {
        let mut room = Room::new(RoomId::new(1), 42);
        room.add_player("Ana", true);
        let card = room.mint(token(3));
        room.players[0].hand.push(card);
        room.draw_deck.push_back(card);

        assert_eq!(
            room.check_integrity(),
            Err(IntegrityError::DuplicateInstance(card.instance))
        );
    }

    #[test]
    fn test_integrity_detects_phase_mismatch() {
        let mut room = Room::new(RoomId::new(1), 42);
        room.add_player("Ana", true);
        room.phase = Phase::Challenge;

        assert_eq!(
            room.check_integrity(),
            Err(IntegrityError::PhaseChallengeMismatch)
        );
    }

    #[test]
    fn test_history_records() {
        let mut room = Room::new(RoomId::new(1), 42);
        let p = room.add_player("Ana", true);
        room.record(ActionRecord::new(p, Action::Skip));
        room.record(ActionRecord::new(p, Action::DrawDeck));

        assert_eq!(room.history.len(), 2);
        assert_eq!(room.history[0].action, Action::Skip);
    }
}
