//! # jupai
//!
//! Host-authoritative engine for a turn-based sentence-building card
//! game: players draw vocabulary tokens, assemble them into sentences
//! ("melds") that must satisfy a grammar, and score on correctness and
//! complexity.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: one host process owns the canonical room state.
//!    Everyone else submits intents and mirrors redacted snapshots.
//!
//! 2. **Serial reducer**: the turn engine applies exactly one action at
//!    a time; concurrency exists only at the replication boundary,
//!    where the inbox serializes it away.
//!
//! 3. **Rules as data**: grammar validation is an ordered rule list
//!    over token flags, so vocabulary growth and rule-set variants
//!    never touch engine code.
//!
//! 4. **Violations are values**: illegal-phase and stale requests are
//!    silently dropped, grammar rejections are reported to the acting
//!    player, and nothing short of structural state corruption is ever
//!    an error.
//!
//! ## Modules
//!
//! - `catalog`: token definitions, card instances, the vocabulary
//!   manifest and shelves
//! - `core`: players, the action union, room state, deterministic RNG
//! - `grammar`: the validation rule list
//! - `score`: meld scoring
//! - `lesson`: lesson content, rigged dealing, hints
//! - `engine`: the turn/phase reducer and the challenge sub-protocol
//! - `net`: host authority, snapshot broadcast, session lifecycle

pub mod catalog;
pub mod core;
pub mod engine;
pub mod grammar;
pub mod lesson;
pub mod net;
pub mod score;

// Re-export commonly used types
pub use crate::catalog::{
    standard_catalog, CardInstance, InstanceId, TokenDef, TokenId, TokenRegistry, WordClass,
};

pub use crate::core::{
    Action, ActionEnvelope, ActionRecord, ChallengeState, ChallengeStatus, GameRng, GameRngState,
    IntegrityError, Phase, Player, PlayerId, Room, RoomId, Selection,
};

pub use crate::grammar::{Rejection, Rule, RuleSet};

pub use crate::lesson::{builtin_lessons, Lesson, LessonProblem, LessonProgress};

pub use crate::engine::{
    ActionOutcome, AppliedEvent, ChallengeVerdict, GameMode, TurnEngine, CHALLENGED_WINDOW,
    PENDING_WINDOW,
};

pub use crate::net::{
    host_step, solo_sandbox, ChallengeSnapshot, ClientHandle, HostAuthority, Lobby, SessionError,
    SessionResult, Snapshot,
};

pub use crate::score::score_meld;
