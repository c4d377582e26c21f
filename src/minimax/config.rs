//! Minimax configuration parameters.

use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

/// Raw depth value meaning "no limit".
pub const UNLIMITED_DEPTH: i64 = -1;

static DEFAULT_MAX_DEPTH: AtomicI64 = AtomicI64::new(UNLIMITED_DEPTH);

/// Set the process-wide depth limit picked up by `SearchConfig::default()`.
///
/// Negative values mean unlimited. Meant to be called once at startup,
/// before any search is configured.
pub fn set_default_max_depth(raw: i64) {
    DEFAULT_MAX_DEPTH.store(raw, Ordering::Relaxed);
}

/// The process-wide depth limit (`None` = unlimited).
#[must_use]
pub fn default_max_depth() -> Option<u32> {
    depth_from_raw(DEFAULT_MAX_DEPTH.load(Ordering::Relaxed))
}

fn depth_from_raw(raw: i64) -> Option<u32> {
    u32::try_from(raw).ok()
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth at which successors are scored by the heuristic instead of
    /// searched further. Depth 0 = the successor of each candidate move.
    /// `None` searches every line to a win or draw.
    pub max_depth: Option<u32>,

    /// Seed for tie-breaking. `None` draws a fresh seed per engine.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Config with a raw depth value (negative = unlimited).
    pub fn from_raw_depth(raw: i64) -> Self {
        Self {
            max_depth: depth_from_raw(raw),
            seed: None,
        }
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Create a new config with no depth limit.
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
