//! Minimax search for game-ai.
//!
//! ## Overview
//!
//! Full-width, depth-bounded minimax over any `SearchableGame`:
//!
//! - **Outcome classes**: each move is a win, a draw, or a heuristic value
//!   when the depth limit cuts the search off
//! - **Preference**: win > best heuristic value > draw > loss
//! - **Variety**: equally good moves are picked at random with a seedable RNG
//! - **No pruning**: cost is O(branching ^ depth), fine for tic-tac-toe
//!
//! ## Usage
//!
//! ```rust
//! use game_ai::games::tictactoe::TicTacToeGame;
//! use game_ai::minimax::{MinimaxSearch, SearchConfig};
//!
//! let mut game = TicTacToeGame::new();
//! game.reset(1).unwrap();
//!
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(1).with_seed(7));
//! let best = search.find_best_move(&game).unwrap();
//! game.make_move(best).unwrap();
//!
//! println!("searched {} nodes", search.stats().nodes_evaluated);
//! ```

pub mod config;
pub mod outcome;
pub mod search;
pub mod stats;

// Re-export main types
pub use config::{default_max_depth, set_default_max_depth, SearchConfig, UNLIMITED_DEPTH};
pub use outcome::{select_best, MoveOutcome};
pub use search::{find_best_move, MinimaxSearch};
pub use stats::SearchStats;
