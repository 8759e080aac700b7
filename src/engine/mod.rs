//! The turn/phase engine and the challenge sub-protocol.

pub mod challenge;
pub mod turn;

pub use challenge::{ChallengeVerdict, CHALLENGED_WINDOW, PENDING_WINDOW};
pub use turn::{ActionOutcome, AppliedEvent, GameMode, TurnEngine};
