//! Game abstraction searched by the minimax engine.
//!
//! Games implement `SearchableGame` to describe:
//! - Whose turn it is
//! - What moves are available
//! - Whether a candidate move wins or draws
//! - How to build the successor state
//! - A heuristic value when search is cut off

use std::fmt::Debug;

use crate::core::{GameError, PlayerId};

/// A move the search can enumerate and return.
pub trait GameMove: Clone + Debug + PartialEq + Send {
    /// The player performing this move.
    fn player(&self) -> PlayerId;
}

/// Capability contract for a two-player, perfect-information game state.
///
/// ## Implementation Notes
///
/// - `is_winning_move` / `is_draw_move`: return `false` for any move that
///   could not legally be applied; never panic
/// - `apply_move`: must return an independent value, the receiver is not
///   touched. Sibling branches of a search share nothing.
/// - `available_moves`: order must be stable for a given position so a
///   seeded tie-break picks the same move every time
/// - `heuristic_value`: only consulted at the depth cutoff. Wins and draws
///   outrank it regardless of its scale.
pub trait SearchableGame: Sized + Clone + Send {
    /// The move type for this game.
    type Move: GameMove;

    /// Mover-to-act.
    fn next_player(&self) -> PlayerId;

    /// Would `mv` immediately win for `mv.player()`?
    fn is_winning_move(&self, mv: &Self::Move) -> bool;

    /// Would `mv` leave a position nobody can still win?
    fn is_draw_move(&self, mv: &Self::Move) -> bool;

    /// Build the state after `mv`, with the turn passed to the other player.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self, GameError>;

    /// Every move the mover-to-act may make, in a stable order.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Static estimate of the position from `player`'s side. Higher is better.
    fn heuristic_value(&self, player: PlayerId) -> f64;

    // === Convenience Methods ===

    /// Can the mover-to-act make any move at all?
    fn has_available_moves(&self) -> bool {
        !self.available_moves().is_empty()
    }
}
