//! Session lifecycle: lobby, locking, and thin client handles.
//!
//! The lobby collects players, then `lock` deals the game and hands the
//! room to a `HostAuthority`. From that point non-host participants are
//! `ClientHandle`s: an outbound action queue plus a read-only snapshot
//! view that lags the host by at most one replication round-trip.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use log::debug;

use super::authority::HostAuthority;
use super::error::{SessionError, SessionResult};
use super::snapshot::Snapshot;
use crate::catalog::{deck_tokens, standard_catalog, CardInstance};
use crate::core::{Action, ActionEnvelope, GameRng, Phase, PlayerId, Room, RoomId};
use crate::engine::TurnEngine;
use crate::lesson::Lesson;

/// Seats per room. Six seats keeps an 80-card deck sufficient for
/// starting hands plus the initial discard.
pub const MAX_PLAYERS: usize = 6;

/// Cards dealt to each player at lock.
pub const STARTING_HAND: usize = 10;

/// Generated deck size for a sandbox game.
pub const DECK_SIZE: usize = 80;

static NEXT_ROOM_ID: AtomicU32 = AtomicU32::new(1);

/// A room collecting players before play begins.
pub struct Lobby {
    room: Room,
}

impl Lobby {
    /// Open a lobby with the host seated first.
    #[must_use]
    pub fn create(host_name: impl Into<String>) -> Self {
        let id = RoomId::new(NEXT_ROOM_ID.fetch_add(1, Ordering::Relaxed));
        let mut room = Room::new(id, 0);
        room.add_player(host_name, true);
        debug!("{id}: lobby opened");
        Self { room }
    }

    /// The allocated room ID.
    #[must_use]
    pub fn room_id(&self) -> RoomId {
        self.room.id
    }

    /// Seated player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.room.player_count()
    }

    /// Seat a joining player. Seating order is turn order.
    pub fn join(&mut self, name: impl Into<String>) -> SessionResult<PlayerId> {
        if self.room.player_count() >= MAX_PLAYERS {
            return Err(SessionError::RoomFull { max: MAX_PLAYERS });
        }
        let id = self.room.add_player(name, false);
        debug!("{}: {} joined", self.room.id, id);
        Ok(id)
    }

    /// Lock the room and start a sandbox game.
    ///
    /// Deals [`STARTING_HAND`] cards per player from a freshly generated
    /// deck, seeds the discard pile with one card, and puts seat 0 in
    /// the DRAW phase. Returns the authority plus one handle per seat.
    pub fn lock(self, seed: u64) -> SessionResult<(HostAuthority, Vec<ClientHandle>)> {
        let mut room = self.room;
        if room.player_count() == 0 {
            return Err(SessionError::EmptyRoom);
        }

        let registry = standard_catalog();
        room.rng = GameRng::new(seed);

        let tokens = deck_tokens(&registry, DECK_SIZE);
        let mut cards: Vec<CardInstance> = tokens.into_iter().map(|t| room.mint(t)).collect();
        room.rng.shuffle(&mut cards);

        let mut cards = cards.into_iter();
        for seat in 0..room.player_count() {
            room.players[seat].hand = cards.by_ref().take(STARTING_HAND).collect();
        }
        if let Some(first_discard) = cards.next() {
            room.discard_pile.push_front(first_discard);
        }
        room.draw_deck = cards.collect();

        room.current_turn = 0;
        room.phase = Phase::Draw;
        room.locked = true;
        debug!(
            "{}: locked, {} players, {} cards in deck",
            room.id,
            room.player_count(),
            room.draw_deck.len()
        );

        let engine = TurnEngine::sandbox(registry);
        Ok(Self::into_session(engine, room))
    }

    /// Lock the room and start a lesson session.
    ///
    /// The acting player gets the rigged hand for the lesson's first
    /// problem and the room opens in the MELD phase.
    pub fn lock_lesson(
        self,
        seed: u64,
        lesson: Lesson,
    ) -> SessionResult<(HostAuthority, Vec<ClientHandle>)> {
        let mut room = self.room;
        if room.player_count() == 0 {
            return Err(SessionError::EmptyRoom);
        }

        let registry = standard_catalog();
        room.rng = GameRng::new(seed);
        room.current_turn = 0;
        room.locked = true;

        let engine = TurnEngine::for_lesson(registry, lesson);
        engine.deal_lesson_hand(&mut room);
        debug!("{}: locked for lesson", room.id);

        Ok(Self::into_session(engine, room))
    }

    fn into_session(engine: TurnEngine, room: Room) -> (HostAuthority, Vec<ClientHandle>) {
        let seats: Vec<PlayerId> = room.players.iter().map(|p| p.id).collect();
        let mut host = HostAuthority::new(engine, room);
        let handles = seats
            .into_iter()
            .map(|player| ClientHandle {
                player,
                next_seq: 0,
                to_host: host.intake(),
                updates: host.subscribe(),
                notices: host.notices_for(player),
                view: None,
            })
            .collect();
        (host, handles)
    }
}

/// A thin participant: submits intents, mirrors snapshots.
///
/// The view is a stale read-only copy of canonical state; it must never
/// be mutated locally and rebroadcast.
pub struct ClientHandle {
    player: PlayerId,
    next_seq: u64,
    to_host: Sender<ActionEnvelope>,
    updates: Receiver<Snapshot>,
    notices: Receiver<String>,
    view: Option<Snapshot>,
}

impl ClientHandle {
    /// This participant's seat.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Submit an action to the host.
    ///
    /// A vanished host is a disconnect, not an error: the action is
    /// simply never applied.
    pub fn submit(&mut self, action: Action) {
        self.next_seq += 1;
        let envelope = ActionEnvelope::new(self.next_seq, self.player, action);
        let _ = self.to_host.send(envelope);
    }

    /// Drain pending snapshots and return the freshest view.
    pub fn poll(&mut self) -> Option<&Snapshot> {
        while let Ok(snapshot) = self.updates.try_recv() {
            self.view = Some(snapshot);
        }
        self.view.as_ref()
    }

    /// The last seen view without draining.
    #[must_use]
    pub fn view(&self) -> Option<&Snapshot> {
        self.view.as_ref()
    }

    /// Next private notice (a meld rejection reason), if any.
    pub fn poll_notice(&mut self) -> Option<String> {
        self.notices.try_recv().ok()
    }
}

/// Convenience: lock a solo sandbox room (single-player free play).
pub fn solo_sandbox(name: impl Into<String>, seed: u64) -> (HostAuthority, ClientHandle) {
    let lobby = Lobby::create(name);
    let (host, mut handles) = lobby.lock(seed).expect("solo lobby is never empty");
    (host, handles.remove(0))
}

/// Drive one scheduler step: pump the inbox and the challenge window.
///
/// Hosts call this every 0.5-1 s; `now` is injected for testability.
pub fn host_step(host: &mut HostAuthority, now: Instant) -> usize {
    host.pump(now)
}
