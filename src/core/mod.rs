//! Core types: players, actions, room state, RNG.
//!
//! These are the building blocks the turn engine reduces over. The room
//! is the canonical aggregate; everything else is data that flows
//! through it.

pub mod action;
pub mod player;
pub mod rng;
pub mod room;

pub use action::{Action, ActionEnvelope, ActionRecord, Selection};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use room::{ChallengeState, ChallengeStatus, IntegrityError, Phase, Room, RoomId};
