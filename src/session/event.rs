//! Events announced by a game session.
//!
//! Subscribers (a UI, a logger, a test) receive every event over their own
//! channel, in the order the session produced them.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::games::tictactoe::{GameStatus, Move};

/// Something that happened to the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The board was cleared.
    Reset { first_player: PlayerId },

    /// A move was applied to the live game.
    MoveMade { mv: Move, status: GameStatus },

    /// A background search started for `player`.
    AiStarted { player: PlayerId },

    /// A background search produced `mv`.
    AiFinished { mv: Move },

    /// The search result no longer fit the live game and was dropped.
    StaleMoveDiscarded { mv: Move },
}

/// What became of a delivered search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiDelivery {
    /// The move was played on the live game.
    Applied { mv: Move, status: GameStatus },

    /// The live game moved on; the result was discarded.
    Stale(Move),
}
