//! Session settings.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::games::tictactoe::DEFAULT_BOARD_SIZE;

/// Who plays, who starts, and on what board.
///
/// The defaults match a human (X) against the computer (O), X first, 3x3.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Player to move after every reset.
    pub first_player: PlayerId,

    /// Is each player human? Computer players are moved by the search.
    pub human: PlayerMap<bool>,

    /// Side length of the board.
    pub board_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_player: PlayerId::One,
            human: PlayerMap::new(|p| p == PlayerId::One),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl SessionConfig {
    /// Create a new config with a custom first player.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Create a new config marking `player` as human or computer.
    pub fn with_human(mut self, player: PlayerId, human: bool) -> Self {
        self.human[player] = human;
        self
    }

    /// Create a new config with a custom board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }
}
