//! The live game and its computer players.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, warn};

use crate::core::{GameRng, PlayerId, SearchError, SessionError};
use crate::games::tictactoe::{GameStatus, Move, TicTacToeGame};
use crate::minimax::{MinimaxSearch, SearchConfig};
use crate::rules::SearchableGame;

use super::config::SessionConfig;
use super::event::{AiDelivery, SessionEvent};
use super::handle::SearchHandle;

/// Owner of one live tic-tac-toe game.
///
/// Human moves are applied directly. Whenever a computer player is to move
/// the session starts a background search; at most one search is
/// outstanding at a time. A finished search's move is applied only if its
/// player is still the mover-to-act.
///
/// ## Example
///
/// ```
/// use game_ai::core::PlayerId;
/// use game_ai::minimax::SearchConfig;
/// use game_ai::session::{AiDelivery, GameSession, SessionConfig};
///
/// let mut session = GameSession::new(SessionConfig::default(), SearchConfig::default().with_seed(1));
/// session.start().unwrap();
///
/// // X is human, O is the computer.
/// session.handle_human_move(1, 1).unwrap();
/// assert!(session.is_thinking());
///
/// match session.wait_for_ai().unwrap() {
///     AiDelivery::Applied { mv, .. } => assert_eq!(mv.player, PlayerId::Two),
///     AiDelivery::Stale(_) => unreachable!(),
/// }
/// ```
pub struct GameSession {
    game: TicTacToeGame,
    config: SessionConfig,
    search_config: SearchConfig,
    rng: GameRng,
    pending: Option<SearchHandle<Move>>,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl GameSession {
    /// Session on an empty board. Call `start` to begin play.
    pub fn new(config: SessionConfig, search_config: SearchConfig) -> Self {
        let game = TicTacToeGame::with_size(config.board_size);
        Self::with_game(game, config, search_config)
    }

    /// Session resuming an imported board (0/1/2 rows).
    ///
    /// A malformed board is replaced by an empty default one.
    pub fn with_board(rows: &[Vec<u8>], config: SessionConfig, search_config: SearchConfig) -> Self {
        Self::with_game(TicTacToeGame::from_rows(rows), config, search_config)
    }

    fn with_game(game: TicTacToeGame, config: SessionConfig, search_config: SearchConfig) -> Self {
        let rng = search_config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            game,
            config,
            search_config,
            rng,
            pending: None,
            subscribers: Vec::new(),
        }
    }

    /// Receive every event from now on.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// The live game.
    #[must_use]
    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Reset with the configured first player.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.reset(self.config.first_player.number())
    }

    /// Clear the board with `first_player` (1 or 2) to move.
    ///
    /// An invalid player number is refused and the game is left as it was.
    /// A search still running for the old board is abandoned; its result
    /// will never be applied.
    pub fn reset(&mut self, first_player: u8) -> Result<(), SessionError> {
        self.game.reset(first_player)?;

        if let Some(abandoned) = self.pending.take() {
            warn!(mover = %abandoned.mover(), "abandoning search from before the reset");
        }

        let first = self.game.next_player();
        self.emit(SessionEvent::Reset { first_player: first });
        if !self.is_player_human(first) {
            info!(%first, "computer moves first");
        }
        self.start_ai_if_needed();
        Ok(())
    }

    /// Apply a move to the live game.
    ///
    /// If the next mover is a computer, its search starts right away.
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, SessionError> {
        let status = self.game.make_move(mv)?;
        self.emit(SessionEvent::MoveMade { mv, status });
        self.start_ai_if_needed();
        Ok(status)
    }

    /// A human picked (row, column); play it for the mover if the mover is
    /// human.
    pub fn handle_human_move(&mut self, row: usize, column: usize) -> Result<GameStatus, SessionError> {
        let player = self.game.next_player();
        if !self.is_player_human(player) {
            return Err(SessionError::NotHumanTurn);
        }
        self.make_move(Move::new(player, row, column))
    }

    /// Mark `player` as human or computer.
    ///
    /// Handing the current mover to the computer starts its search.
    pub fn set_player_human(&mut self, player: PlayerId, human: bool) {
        info!(%player, human, "player control changed");
        self.config.human[player] = human;
        if !human && player == self.game.next_player() {
            self.start_ai_if_needed();
        }
    }

    #[must_use]
    pub fn is_player_human(&self, player: PlayerId) -> bool {
        self.config.human[player]
    }

    /// Is a search outstanding?
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a background search for the mover-to-act.
    ///
    /// Rejected with `SessionError::Busy` while another search is
    /// outstanding; requests are never queued.
    pub fn request_ai_move(&mut self) -> Result<(), SessionError> {
        if let Some(pending) = &self.pending {
            warn!(mover = %pending.mover(), "the game AI is already calculating a move");
            return Err(SessionError::Busy);
        }
        if !self.game.has_available_moves() {
            return Err(SearchError::NoAvailableMoves.into());
        }

        let player = self.game.next_player();
        let search = MinimaxSearch::new(self.search_config.clone()).with_rng(self.rng.fork());
        self.pending = Some(SearchHandle::spawn(self.game.clone(), search));
        self.emit(SessionEvent::AiStarted { player });
        Ok(())
    }

    /// Deliver the outstanding search result if it is ready.
    ///
    /// `Ok(None)` when nothing is outstanding or the worker is still running.
    pub fn poll_ai(&mut self) -> Result<Option<AiDelivery>, SessionError> {
        let Some(handle) = self.pending.as_mut() else {
            return Ok(None);
        };
        match handle.try_result() {
            None => Ok(None),
            Some(result) => {
                self.pending = None;
                self.deliver(result).map(Some)
            }
        }
    }

    /// Block until the outstanding search finishes and deliver its result.
    pub fn wait_for_ai(&mut self) -> Result<AiDelivery, SessionError> {
        let handle = self.pending.take().ok_or(SessionError::NoSearchPending)?;
        let result = handle.wait();
        self.deliver(result)
    }

    /// Apply a search result unless the live game has moved on.
    ///
    /// Whatever the result, a computer mover left without a search gets a
    /// fresh one.
    fn deliver(&mut self, result: Result<Move, SessionError>) -> Result<AiDelivery, SessionError> {
        let delivery = self.apply_result(result);
        self.start_ai_if_needed();
        delivery
    }

    fn apply_result(&mut self, result: Result<Move, SessionError>) -> Result<AiDelivery, SessionError> {
        let mv = result?;
        info!(%mv, "found best move");
        self.emit(SessionEvent::AiFinished { mv });

        if mv.player != self.game.next_player() {
            warn!(%mv, mover = %self.game.next_player(), "the game AI is attempting to move the wrong player");
            return Ok(self.discard(mv));
        }

        match self.make_move(mv) {
            Ok(status) => Ok(AiDelivery::Applied { mv, status }),
            Err(SessionError::Game(err)) => {
                warn!(%mv, %err, "search result no longer playable");
                Ok(self.discard(mv))
            }
            Err(err) => Err(err),
        }
    }

    fn discard(&mut self, mv: Move) -> AiDelivery {
        self.emit(SessionEvent::StaleMoveDiscarded { mv });
        AiDelivery::Stale(mv)
    }

    fn start_ai_if_needed(&mut self) {
        let mover = self.game.next_player();
        if self.game.status().is_terminal() || self.is_player_human(mover) {
            return;
        }
        if let Some(pending) = &self.pending {
            debug!(pending = %pending.mover(), %mover, "computer move waits for the outstanding search");
            return;
        }
        if let Err(err) = self.request_ai_move() {
            debug!(%err, "computer move not started");
        }
    }

    /// Status line for the player(s): who won, or whose turn it is.
    #[must_use]
    pub fn turn_prompt(&self) -> String {
        let status = self.game.status();
        if let Some(winner) = status.winner() {
            return format!("Player {} wins!", winner.symbol());
        }
        if status == GameStatus::Draw {
            return "Game is a draw!".to_string();
        }

        let mover = self.game.next_player();
        if !self.is_player_human(mover) {
            "Calculating the optimal move...".to_string()
        } else if !PlayerId::ALL.iter().all(|&p| self.is_player_human(p)) {
            "Your turn!".to_string()
        } else {
            format!("Player {}'s turn!", mover.symbol())
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
