//! Challenge/consensus sub-protocol over a proposed meld.
//!
//! In multi-party rooms a meld is never trusted outright: acceptance by
//! the grammar engine opens a bounded window in which peers may contest
//! it, and a contested meld goes to a vote. The window deadline is plain
//! data; the host's periodic tick compares it to the clock, so no timer
//! outlives the phase.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::catalog::CardInstance;
use crate::core::{ChallengeState, ChallengeStatus, Phase, PlayerId, Room};

/// Window length for an uncontested proposal.
pub const PENDING_WINDOW: Duration = Duration::from_secs(5);

/// Window length once a challenge is raised, measured from the
/// challenge moment.
pub const CHALLENGED_WINDOW: Duration = Duration::from_secs(10);

/// How a resolved window came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeVerdict {
    /// Meld finalized and scored.
    Accepted,
    /// Meld undone; the proposer's hand was restored.
    Rejected,
}

/// Open a challenge window over a freshly proposed meld.
///
/// The acting player's selected hand cards have already been
/// provisionally removed; `removed` records them with their original
/// hand indices for exact restore.
pub fn open(
    room: &mut Room,
    meld: Vec<CardInstance>,
    removed: Vec<(usize, CardInstance)>,
    now: Instant,
) {
    room.challenge = Some(ChallengeState {
        meld,
        removed,
        challenger: None,
        status: ChallengeStatus::Pending,
        deadline: now + PENDING_WINDOW,
        votes: FxHashMap::default(),
    });
    room.phase = Phase::Challenge;
}

/// Raise a challenge against the pending proposal.
///
/// Legal only while the window is `Pending` and only for players other
/// than the proposer (the seat at `current_turn`). Returns whether the
/// challenge was applied.
pub fn contest(room: &mut Room, challenger: PlayerId, now: Instant) -> bool {
    if challenger.index() == room.current_turn {
        return false;
    }
    let Some(challenge) = room.challenge.as_mut() else {
        return false;
    };
    if challenge.status != ChallengeStatus::Pending {
        return false;
    }

    challenge.status = ChallengeStatus::Challenged;
    challenge.challenger = Some(challenger);
    challenge.deadline = now + CHALLENGED_WINDOW;
    true
}

/// Record a vote on a contested proposal.
///
/// Any player may vote; a later vote from the same player overwrites
/// the earlier one. Returns whether the vote was recorded.
pub fn vote(room: &mut Room, voter: PlayerId, accept: bool) -> bool {
    let Some(challenge) = room.challenge.as_mut() else {
        return false;
    };
    if challenge.status != ChallengeStatus::Challenged {
        return false;
    }

    challenge.votes.insert(voter, accept);
    true
}

/// Has the window passed its deadline?
#[must_use]
pub fn expired(challenge: &ChallengeState, now: Instant) -> bool {
    now >= challenge.deadline
}

/// Tally a contested window.
///
/// Accepts win ties (benefit of the doubt to the proposer); abstainers
/// count toward neither side.
#[must_use]
pub fn tally(votes: &FxHashMap<PlayerId, bool>) -> ChallengeVerdict {
    let accepts = votes.values().filter(|&&v| v).count();
    let rejects = votes.len() - accepts;
    if accepts >= rejects {
        ChallengeVerdict::Accepted
    } else {
        ChallengeVerdict::Rejected
    }
}
