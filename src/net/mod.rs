//! Replication: host authority, snapshots, session lifecycle.

pub mod authority;
pub mod error;
pub mod session;
pub mod snapshot;

pub use authority::HostAuthority;
pub use error::{SessionError, SessionResult};
pub use session::{
    host_step, solo_sandbox, ClientHandle, Lobby, DECK_SIZE, MAX_PLAYERS, STARTING_HAND,
};
pub use snapshot::{ChallengeSnapshot, Snapshot};
