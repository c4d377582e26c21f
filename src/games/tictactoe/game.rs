//! Tic-tac-toe game state.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::core::{GameError, PlayerId};
use crate::rules::{GameMove, SearchableGame};

use super::board::{Board, Cell, Line};

/// Progress of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created but no move made yet.
    SetUp,
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
    Draw,
}

impl GameStatus {
    /// Status recording a win for `player`.
    #[must_use]
    pub const fn won_by(player: PlayerId) -> Self {
        match player {
            PlayerId::One => GameStatus::PlayerOneWon,
            PlayerId::Two => GameStatus::PlayerTwoWon,
        }
    }

    /// Won or drawn.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::SetUp | GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::PlayerOneWon => Some(PlayerId::One),
            GameStatus::PlayerTwoWon => Some(PlayerId::Two),
            _ => None,
        }
    }
}

/// One mark placed by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub row: usize,
    pub column: usize,
}

impl Move {
    #[must_use]
    pub const fn new(player: PlayerId, row: usize, column: usize) -> Self {
        Self { player, row, column }
    }
}

impl GameMove for Move {
    fn player(&self) -> PlayerId {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.player, self.row, self.column)
    }
}

/// A tic-tac-toe game: board, mover-to-act and status.
///
/// ## Example
///
/// ```
/// use game_ai::core::PlayerId;
/// use game_ai::games::tictactoe::{GameStatus, Move, TicTacToeGame};
/// use game_ai::rules::SearchableGame;
///
/// let mut game = TicTacToeGame::new();
/// game.reset(1).unwrap();
/// game.make_move(Move::new(PlayerId::One, 1, 1)).unwrap();
///
/// assert_eq!(game.next_player(), PlayerId::Two);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeGame {
    board: Board,
    next_player: PlayerId,
    status: GameStatus,
}

impl TicTacToeGame {
    /// Empty 3x3 game, player one to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Empty `size` x `size` game, player one to move.
    ///
    /// A size of 0 is refused and replaced by the default 3x3 board.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        match Board::new(size) {
            Ok(board) => Self::with_board(board),
            Err(err) => {
                error!(%err, size, "refusing board size, starting from a 3x3 board");
                Self::new()
            }
        }
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            next_player: PlayerId::One,
            status: GameStatus::SetUp,
        }
    }

    /// Game on an imported board.
    ///
    /// A malformed board is refused and replaced by a fresh default board.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        match Board::from_rows(rows) {
            Ok(board) => Self::with_board(board),
            Err(err) => {
                error!(%err, "refusing imported board, starting from an empty one");
                Self::new()
            }
        }
    }

    /// Clear the board and start over with `first_player` (1 or 2) to move.
    ///
    /// An invalid player number is refused and nothing changes.
    pub fn reset(&mut self, first_player: u8) -> Result<(), GameError> {
        let Some(first) = PlayerId::from_number(first_player) else {
            error!(first_player, "tic-tac-toe has two players, refusing reset");
            return Err(GameError::InvalidPlayer(first_player));
        };

        self.board = Board::empty(self.board.size());
        self.next_player = first;
        self.status = GameStatus::InProgress;
        info!(first = %first, "game reset");
        Ok(())
    }

    /// Play a move on the live game.
    ///
    /// The move must target an empty cell on the board, come from the
    /// mover-to-act, and the game must not be over. Returns the new status.
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.check_playable(&mv)?;
        if mv.player != self.next_player {
            return Err(GameError::WrongPlayer {
                expected: self.next_player,
                actual: mv.player,
            });
        }

        let status = self.classify(&mv);
        self.place(&mv, status);
        info!(%mv, ?status, "move made");
        Ok(status)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Export the board as rows of 0/1/2 values.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.board.to_rows()
    }

    /// Player holding (row, column); `None` if empty or off the board.
    #[must_use]
    pub fn player_at(&self, row: usize, column: usize) -> Option<PlayerId> {
        self.board.get(row, column).and_then(Cell::player)
    }

    /// The completed line, if any player holds one.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.board.lines().find(|&line| self.board.line_owner(line).is_some())
    }

    /// Status the game would have after `mv`. Caller has validated `mv`.
    fn classify(&self, mv: &Move) -> GameStatus {
        if self.wins(mv) {
            GameStatus::won_by(mv.player)
        } else if self.draws(mv) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn place(&mut self, mv: &Move, status: GameStatus) {
        self.board.set(mv.row, mv.column, Cell::Taken(mv.player));
        self.next_player = mv.player.opponent();
        self.status = status;
    }

    fn check_playable(&self, mv: &Move) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        match self.board.get(mv.row, mv.column) {
            None => Err(GameError::OutOfBounds {
                row: mv.row,
                column: mv.column,
                size: self.board.size(),
            }),
            Some(Cell::Taken(_)) => Err(GameError::Occupied {
                row: mv.row,
                column: mv.column,
            }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    fn wins(&self, mv: &Move) -> bool {
        let size = self.board.size();
        self.board
            .lines()
            .filter(|line| line.contains(mv.row, mv.column, size))
            .any(|line| self.board.completes_line(line, mv.row, mv.column, mv.player))
    }

    fn draws(&self, mv: &Move) -> bool {
        let mut scratch = self.board.clone();
        scratch.set(mv.row, mv.column, Cell::Taken(mv.player));
        !scratch.lines().any(|line| scratch.is_line_winnable(line))
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchableGame for TicTacToeGame {
    type Move = Move;

    fn next_player(&self) -> PlayerId {
        self.next_player
    }

    fn is_winning_move(&self, mv: &Move) -> bool {
        self.check_playable(mv).is_ok() && self.wins(mv)
    }

    fn is_draw_move(&self, mv: &Move) -> bool {
        self.check_playable(mv).is_ok() && self.draws(mv)
    }

    fn apply_move(&self, mv: &Move) -> Result<Self, GameError> {
        self.check_playable(mv)?;
        let status = self.classify(mv);
        let mut next = self.clone();
        next.place(mv, status);
        Ok(next)
    }

    fn available_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board
            .open_positions()
            .map(|(row, column)| Move::new(self.next_player, row, column))
            .collect()
    }

    /// No positional heuristic: every non-terminal position is neutral (0.0).
    fn heuristic_value(&self, _player: PlayerId) -> f64 {
        0.0
    }
}
