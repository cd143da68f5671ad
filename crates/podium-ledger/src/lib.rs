//! Append-only score log and top-K ranking for the Podium leaderboard.
//!
//! Every completed game is recorded once into a [`Leaderboard`] and kept for
//! the lifetime of the leaderboard. Rankings are derived on demand and never
//! stored.
//!
//! # Architecture
//!
//! - [`leaderboard`] -- The [`Leaderboard`] struct: append-only history with
//!   recording and ranked queries.
//! - [`policy`] -- [`NamePolicy`]: default-label substitution for blank names.
//! - [`ranking`] -- Ordering rules and the bounded top-K selection.
//! - [`shared`] -- [`SharedLeaderboard`]: a lock-guarded handle for callers on
//!   several threads.
//!
//! # Ranking
//!
//! Entries rank by score, highest first. Equal scores rank by insertion
//! order, earliest first. The order is total, so a ranking never depends on
//! the stability of the sort that produced it.
//!
//! # Usage
//!
//! ```
//! use podium_ledger::Leaderboard;
//!
//! let mut board = Leaderboard::default();
//! board.record("Alice", 10.0).ok();
//! board.record("Bob", 20.0).ok();
//! board.record("", 15.0).ok();
//!
//! let top: Vec<String> = board.top_k(3).into_iter().map(|e| e.name).collect();
//! assert_eq!(top, ["Bob", "Anonymous", "Alice"]);
//! ```

pub mod leaderboard;
pub mod policy;
pub mod ranking;
pub mod shared;

// Re-export primary types at crate root.
pub use leaderboard::Leaderboard;
pub use policy::{DEFAULT_LABEL, NamePolicy};
pub use shared::SharedLeaderboard;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when recording a score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeaderboardError {
    /// The score is NaN or infinite.
    #[error("score must be a finite number, got {score}")]
    InvalidScore {
        /// The rejected score.
        score: f64,
    },

    /// Every sequence number has been handed out.
    #[error("entry sequence exhausted after {recorded} entries")]
    SequenceExhausted {
        /// Number of entries recorded so far.
        recorded: usize,
    },

    /// An internal error that should not occur in normal operation.
    #[error("internal leaderboard error: {0}")]
    InternalError(&'static str),
}
