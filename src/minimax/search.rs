//! Full-width minimax search.
//!
//! Every candidate move is classified as a win, a draw, or (at the depth
//! cutoff) a heuristic value. Non-terminal moves are valued by the best
//! reply of the opponent, recursively. No pruning is performed.

use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::core::{GameRng, SearchError};
use crate::rules::{GameMove, SearchableGame};

use super::config::SearchConfig;
use super::outcome::{select_best, MoveOutcome};
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the configuration, the tie-breaking RNG and the statistics of the
/// last search. The depth limit is fixed at construction.
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// RNG for tie-breaking among equally good moves.
    rng: GameRng,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Replace the tie-breaking RNG.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Best move for the mover-to-act of `state`.
    ///
    /// Fails with `SearchError::NoAvailableMoves` when there is nothing to
    /// play.
    #[instrument(level = "debug", skip_all, fields(mover = %state.next_player(), max_depth = ?self.config.max_depth))]
    pub fn find_best_move<G: SearchableGame>(&mut self, state: &G) -> Result<G::Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        let mut candidates = state.available_moves();
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let outcomes = candidates
            .iter()
            .map(|mv| self.outcome(state, mv, 0))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(?outcomes, "top-level outcomes");

        let best = select_best(&outcomes, state.next_player(), &mut self.rng)
            .ok_or(SearchError::NoAvailableMoves)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            best = ?candidates[best],
            outcome = ?outcomes[best],
            nodes = self.stats.nodes_evaluated,
            time_us = self.stats.time_us,
            "found best move"
        );

        Ok(candidates.swap_remove(best))
    }

    /// Outcome of `mv` played from `state`, with best play afterwards.
    fn outcome<G: SearchableGame>(
        &mut self,
        state: &G,
        mv: &G::Move,
        depth: u32,
    ) -> Result<MoveOutcome, SearchError> {
        self.stats.record_node(depth);

        if state.is_winning_move(mv) {
            self.stats.terminal_leaves += 1;
            return Ok(MoveOutcome::Win(mv.player()));
        }
        if state.is_draw_move(mv) {
            self.stats.terminal_leaves += 1;
            return Ok(MoveOutcome::Draw);
        }

        let next = state.apply_move(mv)?;
        if self.config.max_depth == Some(depth) {
            self.stats.heuristic_leaves += 1;
            return Ok(MoveOutcome::Unknown(next.heuristic_value(mv.player())));
        }

        let replies = next.available_moves();
        if replies.is_empty() {
            // Stuck without a decided result; only games other than
            // tic-tac-toe can get here.
            self.stats.heuristic_leaves += 1;
            return Ok(MoveOutcome::Unknown(next.heuristic_value(mv.player())));
        }

        let outcomes = replies
            .iter()
            .map(|reply| self.outcome(&next, reply, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        select_best(&outcomes, next.next_player(), &mut self.rng)
            .map(|idx| outcomes[idx])
            .ok_or(SearchError::NoAvailableMoves)
    }

    /// Get search statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Best move for `state` using the process-wide default configuration.
///
/// ```
/// use game_ai::core::PlayerId;
/// use game_ai::games::tictactoe::{Move, TicTacToeGame};
/// use game_ai::minimax::find_best_move;
///
/// let game = TicTacToeGame::from_rows(&[vec![1, 1, 0], vec![2, 2, 0], vec![0, 0, 0]]);
/// assert_eq!(find_best_move(&game).unwrap(), Move::new(PlayerId::One, 0, 2));
/// ```
pub fn find_best_move<G: SearchableGame>(state: &G) -> Result<G::Move, SearchError> {
    MinimaxSearch::new(SearchConfig::default()).find_best_move(state)
}
