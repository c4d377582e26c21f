//! Game abstraction for the search engine.
//!
//! Games implement `SearchableGame` to define:
//! - Legal moves for the mover-to-act
//! - How moves produce successor states
//! - Win/draw classification of a candidate move
//!
//! The search engine calls into `SearchableGame` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameMove, SearchableGame};
