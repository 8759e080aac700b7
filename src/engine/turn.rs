//! The turn/phase engine: a strict serial reducer over one action at a
//! time.
//!
//! `DRAW → MELD → (CHALLENGE) → DISCARD → DRAW` (next seat), with
//! `MELD → DISCARD` on a skip. The engine owns no concurrency and no
//! timers: the host authority serializes actions before they arrive and
//! drives the challenge window by calling `tick` with the clock.
//!
//! Rule violations are values, never errors: an action that does not
//! fit the current phase (or is malformed, or comes from a stale view)
//! is silently dropped, and a grammar rejection is reported back to the
//! acting player without mutating anything.

use std::time::Instant;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::challenge::{self, ChallengeVerdict};
use crate::catalog::{shelf_tokens, CardInstance, TokenDef, TokenId, TokenRegistry};
use crate::core::{Action, ActionRecord, ChallengeStatus, Phase, PlayerId, Room, Selection};
use crate::grammar::RuleSet;
use crate::lesson::{self, deal_hand, Lesson, LessonProgress};
use crate::score::score_meld;

/// How melds are judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Free play: melds go through the grammar engine and are scored.
    Sandbox,
    /// Guided play: melds are checked against the active problem's
    /// accepted solutions.
    Lesson,
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedEvent {
    Drawn,
    /// Meld accepted and put up for challenge (multi-party rooms).
    MeldProposed,
    /// Meld finalized and scored.
    MeldScored { points: u32 },
    /// Lesson problem solved; `complete` once no problems remain.
    LessonSolved { complete: bool },
    Skipped,
    Discarded,
    Sorted,
    ChallengeRaised,
    VoteRecorded,
}

/// Outcome of applying one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State was mutated.
    Applied(AppliedEvent),
    /// Rejected with a reason for the acting player; state unchanged.
    Rejected(String),
    /// Dropped silently (stale, malformed, or illegal-phase request).
    Ignored,
}

/// The turn/phase engine.
pub struct TurnEngine {
    registry: TokenRegistry,
    rules: RuleSet,
    shelf: FxHashSet<TokenId>,
    mode: GameMode,
    progress: Option<LessonProgress>,
}

impl TurnEngine {
    /// Engine for free play with the standard rule set.
    #[must_use]
    pub fn sandbox(registry: TokenRegistry) -> Self {
        let shelf = shelf_tokens(&registry).into_iter().collect();
        Self {
            registry,
            rules: RuleSet::standard(),
            shelf,
            mode: GameMode::Sandbox,
            progress: None,
        }
    }

    /// Engine for a lesson session.
    #[must_use]
    pub fn for_lesson(registry: TokenRegistry, lesson: Lesson) -> Self {
        let shelf = shelf_tokens(&registry).into_iter().collect();
        Self {
            registry,
            rules: RuleSet::standard(),
            shelf,
            mode: GameMode::Lesson,
            progress: Some(LessonProgress::new(lesson)),
        }
    }

    /// Swap in a different validation rule set.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// The token catalog this engine resolves against.
    #[must_use]
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Current game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Lesson progress, in lesson mode.
    #[must_use]
    pub fn progress(&self) -> Option<&LessonProgress> {
        self.progress.as_ref()
    }

    /// Bump the hint level for the active problem.
    pub fn request_hint(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.request_hint();
        }
    }

    /// The active hint text, if any has been requested.
    #[must_use]
    pub fn active_hint(&self) -> Option<String> {
        self.progress.as_ref().and_then(|p| p.hint())
    }

    /// Deal the rigged hand for the active lesson problem to the acting
    /// player and enter the MELD phase.
    ///
    /// Returns false when there is no active problem.
    pub fn deal_lesson_hand(&self, room: &mut Room) -> bool {
        let Some(progress) = self.progress.as_ref() else {
            return false;
        };
        let Some(problem) = progress.current_problem() else {
            return false;
        };
        let hand = deal_hand(room, &self.registry, progress.lesson(), problem);
        let seat = room.current_turn;
        room.players[seat].hand = hand;
        room.phase = Phase::Meld;
        true
    }

    /// Apply one action for one player. The single entry point.
    pub fn apply(
        &mut self,
        room: &mut Room,
        player: PlayerId,
        action: &Action,
        now: Instant,
    ) -> ActionOutcome {
        let outcome = match action {
            Action::DrawDeck => self.draw(room, player, true),
            Action::DrawDiscard => self.draw(room, player, false),
            Action::Meld { selections } => self.meld(room, player, selections, now),
            Action::Skip => self.skip(room, player),
            Action::Discard { hand_index } => self.discard(room, player, *hand_index),
            Action::Sort => self.sort(room, player),
            Action::Challenge => self.contest(room, player, now),
            Action::Vote { accept } => self.vote(room, player, *accept),
        };

        match &outcome {
            ActionOutcome::Applied(event) => {
                room.record(ActionRecord::new(player, action.clone()));
                debug!("{}: {} applied {:?}", room.id, player, event);
            }
            ActionOutcome::Rejected(reason) => {
                debug!("{}: {} meld rejected: {}", room.id, player, reason);
            }
            ActionOutcome::Ignored => {
                trace!("{}: {} request dropped in {:?}", room.id, player, room.phase);
            }
        }
        outcome
    }

    /// Resolve an expired challenge window, if any.
    ///
    /// The host calls this periodically (and after every pump). Either
    /// verdict folds the room back into the DISCARD phase for the same
    /// acting player.
    pub fn tick(&mut self, room: &mut Room, now: Instant) -> Option<ChallengeVerdict> {
        if room.phase != Phase::Challenge {
            return None;
        }
        {
            let challenge = room.challenge.as_ref()?;
            if !challenge::expired(challenge, now) {
                return None;
            }
        }

        let state = room.challenge.take().expect("challenge present in CHALLENGE phase");
        let verdict = match state.status {
            ChallengeStatus::Pending => ChallengeVerdict::Accepted,
            ChallengeStatus::Challenged => challenge::tally(&state.votes),
        };

        match verdict {
            ChallengeVerdict::Accepted => self.finalize_meld(room, state.meld),
            ChallengeVerdict::Rejected => Self::restore_hand(room, state.removed),
        }
        room.phase = Phase::Discard;
        debug!("{}: challenge resolved {:?}", room.id, verdict);
        Some(verdict)
    }

    // === Per-action handlers ===

    fn draw(&self, room: &mut Room, player: PlayerId, from_deck: bool) -> ActionOutcome {
        if room.phase != Phase::Draw || player.index() != room.current_turn {
            return ActionOutcome::Ignored;
        }
        let card = if from_deck {
            room.draw_deck.pop_front()
        } else {
            room.discard_pile.pop_front()
        };
        let Some(card) = card else {
            // Empty source pool: dropped like a stale request.
            return ActionOutcome::Ignored;
        };

        room.current_player_mut().hand.push(card);
        room.phase = Phase::Meld;
        ActionOutcome::Applied(AppliedEvent::Drawn)
    }

    fn skip(&self, room: &mut Room, player: PlayerId) -> ActionOutcome {
        if room.phase != Phase::Meld || player.index() != room.current_turn {
            return ActionOutcome::Ignored;
        }
        room.phase = Phase::Discard;
        ActionOutcome::Applied(AppliedEvent::Skipped)
    }

    fn discard(&self, room: &mut Room, player: PlayerId, hand_index: usize) -> ActionOutcome {
        if room.phase != Phase::Discard || player.index() != room.current_turn {
            return ActionOutcome::Ignored;
        }
        let seat = room.current_turn;
        if hand_index >= room.players[seat].hand.len() {
            return ActionOutcome::Ignored;
        }

        let card = room.players[seat].hand.remove(hand_index);
        room.discard_pile.push_front(card);
        room.advance_turn();
        room.phase = Phase::Draw;
        ActionOutcome::Applied(AppliedEvent::Discarded)
    }

    /// SORT is legal in any phase and applies to the submitting
    /// player's own hand, on or off turn.
    fn sort(&self, room: &mut Room, player: PlayerId) -> ActionOutcome {
        let registry = &self.registry;
        let Some(p) = room.player_mut(player) else {
            return ActionOutcome::Ignored;
        };
        p.hand
            .sort_by_key(|c| registry.get_unchecked(c.token).class.sort_priority());
        ActionOutcome::Applied(AppliedEvent::Sorted)
    }

    fn contest(&self, room: &mut Room, player: PlayerId, now: Instant) -> ActionOutcome {
        if room.phase != Phase::Challenge {
            return ActionOutcome::Ignored;
        }
        if challenge::contest(room, player, now) {
            ActionOutcome::Applied(AppliedEvent::ChallengeRaised)
        } else {
            ActionOutcome::Ignored
        }
    }

    fn vote(&self, room: &mut Room, player: PlayerId, accept: bool) -> ActionOutcome {
        if room.phase != Phase::Challenge {
            return ActionOutcome::Ignored;
        }
        if challenge::vote(room, player, accept) {
            ActionOutcome::Applied(AppliedEvent::VoteRecorded)
        } else {
            ActionOutcome::Ignored
        }
    }

    fn meld(
        &mut self,
        room: &mut Room,
        player: PlayerId,
        selections: &[Selection],
        now: Instant,
    ) -> ActionOutcome {
        if room.phase != Phase::Meld || player.index() != room.current_turn {
            return ActionOutcome::Ignored;
        }
        let Some((meld, removed)) = self.resolve_selections(room, selections) else {
            return ActionOutcome::Ignored;
        };

        match self.mode {
            GameMode::Sandbox => self.meld_sandbox(room, meld, removed, now),
            GameMode::Lesson => self.meld_lesson(room, meld),
        }
    }

    /// Resolve a selection list into the proposed sentence.
    ///
    /// `None` for malformed input: an out-of-range or repeated hand
    /// index, or a token not on the shelf. Hand cards are only read
    /// here; nothing is removed until the proposal is accepted.
    fn resolve_selections(
        &self,
        room: &mut Room,
        selections: &[Selection],
    ) -> Option<(Vec<CardInstance>, Vec<(usize, CardInstance)>)> {
        let seat = room.current_turn;
        let mut meld = Vec::with_capacity(selections.len());
        let mut removed = Vec::new();
        let mut used = FxHashSet::default();

        for selection in selections {
            match *selection {
                Selection::Hand(index) => {
                    let card = room.players[seat].hand.get(index).copied()?;
                    if !used.insert(index) {
                        return None;
                    }
                    meld.push(card);
                    removed.push((index, card));
                }
                Selection::Shelf(token) => {
                    if !self.shelf.contains(&token) {
                        return None;
                    }
                    meld.push(room.mint(token));
                }
            }
        }

        // Restore bookkeeping is positional; keep it in hand order.
        removed.sort_by_key(|(index, _)| *index);
        Some((meld, removed))
    }

    fn meld_sandbox(
        &mut self,
        room: &mut Room,
        meld: Vec<CardInstance>,
        removed: Vec<(usize, CardInstance)>,
        now: Instant,
    ) -> ActionOutcome {
        let defs: Vec<&TokenDef> = meld
            .iter()
            .map(|c| self.registry.get_unchecked(c.token))
            .collect();
        if let Err(rejection) = self.rules.validate(&defs) {
            return ActionOutcome::Rejected(rejection.message);
        }
        let points = score_meld(&defs);

        let seat = room.current_turn;
        for &(index, _) in removed.iter().rev() {
            room.players[seat].hand.remove(index);
        }

        if room.player_count() > 1 {
            challenge::open(room, meld, removed, now);
            ActionOutcome::Applied(AppliedEvent::MeldProposed)
        } else {
            let player = &mut room.players[seat];
            player.melds.push(meld);
            player.score += points;
            room.phase = Phase::Discard;
            ActionOutcome::Applied(AppliedEvent::MeldScored { points })
        }
    }

    fn meld_lesson(&mut self, room: &mut Room, meld: Vec<CardInstance>) -> ActionOutcome {
        let sentence: String = meld
            .iter()
            .map(|c| self.registry.get_unchecked(c.token).surface.as_str())
            .collect();

        let solved = match self.progress.as_ref().and_then(|p| p.current_problem()) {
            Some(problem) => problem.accepts(&sentence),
            None => return ActionOutcome::Ignored,
        };
        if !solved {
            return ActionOutcome::Rejected(
                "Not quite: grammatically incorrect or word order is off.".to_string(),
            );
        }

        let seat = room.current_turn;
        {
            let player = &mut room.players[seat];
            player.score += lesson::SOLVE_SCORE;
            player.hand.clear();
        }

        let more = self
            .progress
            .as_mut()
            .map(LessonProgress::advance)
            .unwrap_or(false);
        if more {
            self.deal_lesson_hand(room);
            ActionOutcome::Applied(AppliedEvent::LessonSolved { complete: false })
        } else {
            ActionOutcome::Applied(AppliedEvent::LessonSolved { complete: true })
        }
    }

    fn finalize_meld(&self, room: &mut Room, meld: Vec<CardInstance>) {
        let defs: Vec<&TokenDef> = meld
            .iter()
            .map(|c| self.registry.get_unchecked(c.token))
            .collect();
        let points = score_meld(&defs);

        let player = &mut room.players[room.current_turn];
        player.score += points;
        player.melds.push(meld);
    }

    /// Put provisionally removed cards back at their original indices.
    ///
    /// `removed` is ascending, so inserting front to back reconstructs
    /// the exact prior hand layout. Shelf-minted cards in the rejected
    /// meld are dropped; they never consumed deck supply.
    fn restore_hand(room: &mut Room, removed: Vec<(usize, CardInstance)>) {
        let seat = room.current_turn;
        let hand = &mut room.players[seat].hand;
        for (index, card) in removed {
            hand.insert(index.min(hand.len()), card);
        }
    }
}
