//! Square tic-tac-toe board and its lines.
//!
//! The board is N x N (N >= 1, default 3). Cells are stored row-major in a
//! `SmallVec` so the default board lives inline.
//!
//! ## Import/Export
//!
//! Boards convert to and from rows of small integers: 0 = empty,
//! 1 = player one, 2 = player two.
//!
//! ```
//! use game_ai::games::tictactoe::Board;
//!
//! let rows = vec![vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 0]];
//! let board = Board::from_rows(&rows).unwrap();
//! assert_eq!(board.to_rows(), rows);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, PlayerId};

/// Size of a board built without an explicit size.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(PlayerId),
}

impl Cell {
    /// Parse the numeric form (0, 1 or 2).
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Cell::Empty),
            n => match PlayerId::from_number(n) {
                Some(player) => Some(Cell::Taken(player)),
                None => None,
            },
        }
    }

    /// Numeric form: 0 for empty, otherwise the player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(player) => player.number(),
        }
    }

    /// The player holding this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(player) => player.symbol(),
        }
    }
}

/// A straight line of N cells that wins when one player holds all of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Cells on this line for a board of `size`.
    pub fn positions(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Row(row) => (row, i),
            Line::Column(column) => (i, column),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }

    /// Does this line pass through (row, column)?
    #[must_use]
    pub fn contains(self, row: usize, column: usize, size: usize) -> bool {
        match self {
            Line::Row(r) => r == row,
            Line::Column(c) => c == column,
            Line::MainDiagonal => row == column,
            Line::AntiDiagonal => row + column + 1 == size,
        }
    }
}

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "BoardRows")]
pub struct Board {
    size: usize,
    cells: SmallVec<[Cell; 9]>,
}

impl Board {
    /// Create an empty `size` x `size` board. A size of 0 is refused.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::MalformedBoard {
                reason: "board size must be at least 1".to_string(),
            });
        }
        Ok(Self::empty(size))
    }

    /// Empty board of a size already known to be at least 1.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: SmallVec::from_elem(Cell::Empty, size * size),
        }
    }

    /// Import rows of 0/1/2 values.
    ///
    /// Refuses non-square input, an empty grid, and values outside {0, 1, 2}.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::MalformedBoard {
                reason: "board has no rows".to_string(),
            });
        }

        let mut cells = SmallVec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::MalformedBoard {
                    reason: format!("row {} has {} cells, expected {}", row_idx, row.len(), size),
                });
            }
            for (col_idx, &value) in row.iter().enumerate() {
                let cell = Cell::from_number(value).ok_or_else(|| GameError::MalformedBoard {
                    reason: format!("value {} at ({}, {}) is not 0, 1 or 2", value, row_idx, col_idx),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }

    /// Export as rows of 0/1/2 values.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.number()).collect())
            .collect()
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size
    }

    /// Cell at (row, column), or `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if self.in_bounds(row, column) {
            Some(self.cells[row * self.size + column])
        } else {
            None
        }
    }

    /// Is (row, column) on the board and empty?
    #[must_use]
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == Some(Cell::Empty)
    }

    /// Caller guarantees (row, column) is in bounds.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.size + column] = cell;
    }

    /// Empty cells in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Every row, every column, then both diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let size = self.size;
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    fn line_cells(&self, line: Line) -> impl Iterator<Item = Cell> + '_ {
        line.positions(self.size)
            .map(move |(row, column)| self.cells[row * self.size + column])
    }

    /// The player holding every cell of `line`, if there is one.
    #[must_use]
    pub fn line_owner(&self, line: Line) -> Option<PlayerId> {
        let mut cells = self.line_cells(line);
        let owner = cells.next()?.player()?;
        cells.all(|cell| cell == Cell::Taken(owner)).then_some(owner)
    }

    /// Does `line` hold at most one distinct player, so someone could still
    /// complete it?
    #[must_use]
    pub fn is_line_winnable(&self, line: Line) -> bool {
        let mut found: Option<PlayerId> = None;
        for player in self.line_cells(line).filter_map(Cell::player) {
            match found {
                None => found = Some(player),
                Some(p) if p != player => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Would `player` placing at (row, column) complete `line`?
    ///
    /// The placed cell itself is skipped; every other cell must already be
    /// `player`'s.
    #[must_use]
    pub fn completes_line(&self, line: Line, row: usize, column: usize, player: PlayerId) -> bool {
        line.positions(self.size)
            .filter(|&pos| pos != (row, column))
            .all(|(r, c)| self.cells[r * self.size + c] == Cell::Taken(player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.cells.chunks(self.size).enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Serialized form of a `Board`: rows of 0/1/2 values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRows(pub Vec<Vec<u8>>);

impl TryFrom<BoardRows> for Board {
    type Error = GameError;

    fn try_from(rows: BoardRows) -> Result<Self, Self::Error> {
        Board::from_rows(&rows.0)
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        BoardRows(board.to_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[[u8; 3]]) -> Board {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::default();
        assert_eq!(b.size(), 3);
        assert_eq!(b.open_positions().count(), 9);
        assert!(!b.is_full());
    }

    #[test]
    fn test_new_refuses_zero_size() {
        assert!(matches!(Board::new(0), Err(GameError::MalformedBoard { .. })));
        assert_eq!(Board::new(1).unwrap().open_positions().count(), 1);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![0, 0, 0], vec![0, 0]];
        assert!(matches!(Board::from_rows(&rows), Err(GameError::MalformedBoard { .. })));

        let rows = vec![vec![0, 0, 0], vec![0, 0, 0]];
        assert!(Board::from_rows(&rows).is_err());

        assert!(Board::from_rows(&[]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_bad_values() {
        let rows = vec![vec![0, 3], vec![0, 0]];
        assert!(Board::from_rows(&rows).is_err());
    }

    #[test]
    fn test_get_bounds() {
        let b = board(&[[1, 0, 0], [0, 2, 0], [0, 0, 0]]);
        assert_eq!(b.get(0, 0), Some(Cell::Taken(PlayerId::One)));
        assert_eq!(b.get(1, 1), Some(Cell::Taken(PlayerId::Two)));
        assert_eq!(b.get(2, 2), Some(Cell::Empty));
        assert_eq!(b.get(3, 0), None);
        assert_eq!(b.get(0, 3), None);
    }

    #[test]
    fn test_open_positions_row_major() {
        let b = board(&[[1, 0, 2], [0, 1, 0], [2, 0, 0]]);
        let open: Vec<_> = b.open_positions().collect();
        assert_eq!(open, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_lines() {
        let b = Board::new(4).unwrap();
        let lines: Vec<_> = b.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], Line::MainDiagonal);
        assert_eq!(lines[9], Line::AntiDiagonal);

        let anti: Vec<_> = Line::AntiDiagonal.positions(3).collect();
        assert_eq!(anti, vec![(0, 2), (1, 1), (2, 0)]);
        assert!(Line::AntiDiagonal.contains(2, 0, 3));
        assert!(!Line::AntiDiagonal.contains(0, 0, 3));
    }

    #[test]
    fn test_line_owner() {
        let b = board(&[[2, 1, 1], [0, 2, 1], [0, 0, 2]]);
        assert_eq!(b.line_owner(Line::MainDiagonal), Some(PlayerId::Two));
        assert_eq!(b.line_owner(Line::Column(2)), None);
        assert_eq!(b.line_owner(Line::Row(2)), None);
    }

    #[test]
    fn test_line_winnable() {
        let b = board(&[[1, 0, 1], [2, 1, 0], [0, 0, 2]]);
        assert!(b.is_line_winnable(Line::Row(0)));
        assert!(!b.is_line_winnable(Line::Row(1)));
        assert!(b.is_line_winnable(Line::Column(1)));
        assert!(!b.is_line_winnable(Line::MainDiagonal));
        assert!(b.is_line_winnable(Line::AntiDiagonal));
    }

    #[test]
    fn test_completes_line() {
        let b = board(&[[1, 1, 0], [0, 0, 0], [0, 0, 0]]);
        assert!(b.completes_line(Line::Row(0), 0, 2, PlayerId::One));
        assert!(!b.completes_line(Line::Row(0), 0, 2, PlayerId::Two));
        assert!(!b.completes_line(Line::Column(2), 0, 2, PlayerId::One));
    }

    #[test]
    fn test_display() {
        let b = board(&[[1, 0, 2], [0, 0, 0], [0, 0, 1]]);
        assert_eq!(b.to_string(), "X.O\n...\n..X");
    }

    #[test]
    fn test_serde_uses_rows() {
        let b = board(&[[1, 0, 2], [0, 0, 0], [0, 0, 1]]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[[1,0,2],[0,0,0],[0,0,1]]");

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);

        assert!(serde_json::from_str::<Board>("[[1,0],[0]]").is_err());
    }
}
