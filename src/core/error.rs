//! Error types for game rules, search and session hosting.

use thiserror::Error;

use super::PlayerId;

/// A move or configuration the game refuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("position ({row}, {column}) is outside the {size}x{size} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("position ({row}, {column}) is already occupied")]
    Occupied { row: usize, column: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongPlayer { expected: PlayerId, actual: PlayerId },

    #[error("game already over")]
    GameOver,

    #[error("invalid player number {0} (must be 1 or 2)")]
    InvalidPlayer(u8),

    #[error("malformed board: {reason}")]
    MalformedBoard { reason: String },
}

/// Failure of a minimax search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("no available moves to search")]
    NoAvailableMoves,

    #[error("successor state could not be built: {0}")]
    Game(#[from] GameError),
}

/// Failure reported by a game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the game AI is already calculating a move")]
    Busy,

    #[error("no AI search is outstanding")]
    NoSearchPending,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("search worker stopped without delivering a move")]
    WorkerLost,

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
