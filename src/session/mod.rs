//! Hosting a live game against computer players.
//!
//! ## Overview
//!
//! A `GameSession` owns one tic-tac-toe game and decides, after every
//! reset and every move, whether the computer should play next. Searches
//! run on a worker thread against a snapshot of the game:
//!
//! - **One at a time**: a second request while a search is outstanding is
//!   rejected with `SessionError::Busy`
//! - **Delivered once**: `poll_ai` or `wait_for_ai` hands the result back
//!   exactly once
//! - **Stale results dropped**: a move whose player is no longer the
//!   mover-to-act, or which no longer fits the board, is discarded
//! - **Resets abandon searches**: a search started before a reset is never
//!   delivered
//!
//! Every change is announced as a `SessionEvent` to all subscribers.

pub mod config;
pub mod event;
pub mod handle;
pub mod host;

pub use config::SessionConfig;
pub use event::{AiDelivery, SessionEvent};
pub use handle::SearchHandle;
pub use host::GameSession;
