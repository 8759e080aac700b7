use thiserror::Error;

use crate::core::IntegrityError;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("room is locked; no new players may join")]
    RoomLocked,

    #[error("room is full ({max} seats)")]
    RoomFull { max: usize },

    #[error("cannot start a game with no players seated")]
    EmptyRoom,

    #[error("room halted after state corruption: {0}")]
    Halted(#[from] IntegrityError),

    #[error("snapshot encode error: {0}")]
    Encode(String),

    #[error("snapshot decode error: {0}")]
    Decode(String),
}
