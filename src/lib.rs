//! # game-ai
//!
//! Tic-tac-toe on an N x N board with a minimax computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The minimax engine only sees the
//!    `SearchableGame` trait. Tic-tac-toe is one implementation.
//!
//! 2. **Early Draws**: A position is a draw as soon as no row, column or
//!    diagonal can still be completed by a single player, not only when
//!    the board is full.
//!
//! 3. **Reproducible Variety**: Equally good moves are chosen at random
//!    from a seedable RNG, so games differ but tests replay exactly.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, error types
//! - `rules`: `SearchableGame` trait the search engine plays against
//! - `games`: Game implementations (tic-tac-toe)
//! - `minimax`: Depth-bounded minimax search and move selection
//! - `session`: A live game with background computer players

pub mod core;
pub mod games;
pub mod minimax;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, PlayerId, PlayerMap, SearchError, SessionError};

pub use crate::rules::{GameMove, SearchableGame};

pub use crate::games::tictactoe::{Board, Cell, GameStatus, Line, Move, TicTacToeGame};

pub use crate::minimax::{find_best_move, MinimaxSearch, MoveOutcome, SearchConfig, SearchStats};

pub use crate::session::{AiDelivery, GameSession, SessionConfig, SessionEvent};
