//! Core types: players, RNG, errors.
//!
//! These are game-agnostic. The search engine and every concrete game
//! build on them.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{GameError, SearchError, SessionError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
