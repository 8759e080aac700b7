//! The replication authority: single writer over canonical room state.
//!
//! Remote participants never mutate state. They enqueue `ActionEnvelope`s
//! into the host's inbox; the host drains it one entry at a time, applies
//! each through the turn engine, verifies integrity, and broadcasts a
//! fresh snapshot to every subscriber. Per-sender channel order gives
//! submission order per participant; cross-participant order is
//! host-observed arrival order.
//!
//! Duplicate delivery is tolerated by a per-player sequence watermark:
//! an envelope at or below the last seen sequence is dropped, so
//! redelivery of an already-applied action cannot double-credit it.

use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use super::snapshot::Snapshot;
use crate::core::{ActionEnvelope, PlayerId, Room};
use crate::engine::{ActionOutcome, ChallengeVerdict, TurnEngine};

/// Host-side owner of the canonical room state.
pub struct HostAuthority {
    engine: TurnEngine,
    room: Room,
    inbox: Receiver<ActionEnvelope>,
    intake: Sender<ActionEnvelope>,
    subscribers: Vec<Sender<Snapshot>>,
    notices: FxHashMap<PlayerId, Sender<String>>,
    applied_seq: FxHashMap<PlayerId, u64>,
    halted: bool,
}

impl HostAuthority {
    /// Take ownership of a room and its engine.
    #[must_use]
    pub fn new(engine: TurnEngine, room: Room) -> Self {
        let (intake, inbox) = unbounded();
        Self {
            engine,
            room,
            inbox,
            intake,
            subscribers: Vec::new(),
            notices: FxHashMap::default(),
            applied_seq: FxHashMap::default(),
            halted: false,
        }
    }

    /// The canonical room state. Host-local reads only; remote views
    /// come from snapshots.
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The turn engine.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Mutable engine access (lesson hints).
    pub fn engine_mut(&mut self) -> &mut TurnEngine {
        &mut self.engine
    }

    /// Has the room been halted after state corruption?
    #[must_use]
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// A cloneable submission endpoint for a client.
    #[must_use]
    pub fn intake(&self) -> Sender<ActionEnvelope> {
        self.intake.clone()
    }

    /// Register a snapshot subscriber.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Register the private notice channel for one player.
    ///
    /// Grammar rejections are surfaced here, to the acting player only;
    /// they are never broadcast.
    pub fn notices_for(&mut self, player: PlayerId) -> Receiver<String> {
        let (tx, rx) = unbounded();
        self.notices.insert(player, tx);
        rx
    }

    /// Drain the inbox, apply each action, and resolve an expired
    /// challenge window. Returns the number of applied mutations.
    ///
    /// Call on every scheduler tick (0.5-1 s) and after client input.
    pub fn pump(&mut self, now: Instant) -> usize {
        let mut applied = 0;

        while let Ok(envelope) = self.inbox.try_recv() {
            if self.halted {
                trace!("{}: dropping input, room halted", self.room.id);
                continue;
            }
            if self.is_duplicate(&envelope) {
                warn!(
                    "{}: duplicate delivery from {} (seq {})",
                    self.room.id, envelope.player, envelope.seq
                );
                continue;
            }

            let outcome =
                self.engine
                    .apply(&mut self.room, envelope.player, &envelope.action, now);
            // Watermark advances for every observed envelope, applied or
            // not, so a redelivered stale request stays dropped.
            self.applied_seq.insert(envelope.player, envelope.seq);

            match outcome {
                ActionOutcome::Applied(_) => {
                    applied += 1;
                    if !self.verify() {
                        break;
                    }
                    self.broadcast(now);
                }
                ActionOutcome::Rejected(reason) => {
                    if let Some(tx) = self.notices.get(&envelope.player) {
                        let _ = tx.send(reason);
                    }
                }
                ActionOutcome::Ignored => {}
            }
        }

        if !self.halted {
            if let Some(verdict) = self.engine.tick(&mut self.room, now) {
                applied += 1;
                if self.verify() {
                    self.broadcast(now);
                }
                debug!("{}: window verdict {:?}", self.room.id, verdict);
            }
        }

        applied
    }

    /// Resolve an expired challenge window without draining input.
    pub fn tick(&mut self, now: Instant) -> Option<ChallengeVerdict> {
        if self.halted {
            return None;
        }
        let verdict = self.engine.tick(&mut self.room, now);
        if verdict.is_some() && self.verify() {
            self.broadcast(now);
        }
        verdict
    }

    fn is_duplicate(&self, envelope: &ActionEnvelope) -> bool {
        let last = self.applied_seq.get(&envelope.player).copied().unwrap_or(0);
        envelope.seq <= last
    }

    /// Structural check after every mutation. On failure the room halts:
    /// no further mutation, a fresh session is required.
    fn verify(&mut self) -> bool {
        match self.room.check_integrity() {
            Ok(()) => true,
            Err(err) => {
                warn!("{}: state corruption, halting room: {err}", self.room.id);
                self.halted = true;
                false
            }
        }
    }

    fn broadcast(&mut self, now: Instant) {
        let snapshot = Snapshot::capture(&self.room, now);
        // Disconnected subscribers are dropped; nobody is waited on.
        self.subscribers
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
