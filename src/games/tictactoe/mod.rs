//! Tic-tac-toe on an N x N board.
//!
//! - Players alternate placing marks on empty cells
//! - Holding a whole row, column or diagonal wins
//! - The game is drawn as soon as no line can be completed by anyone,
//!   even if cells remain empty
//!
//! `TicTacToeGame` implements `SearchableGame`, so the minimax engine can
//! play it.

mod board;
mod game;

pub use board::{Board, BoardRows, Cell, Line, DEFAULT_BOARD_SIZE};
pub use game::{GameStatus, Move, TicTacToeGame};
