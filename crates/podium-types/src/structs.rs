//! Recorded leaderboard entries and their ranked projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EntrySeq;

// ---------------------------------------------------------------------------
// ScoreEntry
// ---------------------------------------------------------------------------

/// One completed game as recorded by the leaderboard.
///
/// Entries are immutable once recorded. The leaderboard only ever hands out
/// shared references or clones, so the public fields cannot be used to
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoreEntry {
    /// Insertion order within the owning leaderboard. Tie-break key only.
    pub seq: EntrySeq,
    /// Display label of the player, after default-label substitution.
    pub name: String,
    /// Final score of the game. Higher is better. Always finite.
    pub score: f64,
    /// Real-world timestamp when the entry was recorded. Not used for
    /// ordering.
    pub recorded_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Standing
// ---------------------------------------------------------------------------

/// A ranked, display-ready view of a [`ScoreEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Standing {
    /// 1-based position on the board.
    pub rank: u32,
    /// Display label of the player.
    pub name: String,
    /// Final score of the game.
    pub score: f64,
}

impl Standing {
    /// Build a standing for `entry` at the given 1-based rank.
    pub fn new(rank: u32, entry: &ScoreEntry) -> Self {
        Self {
            rank,
            name: entry.name.clone(),
            score: entry.score,
        }
    }
}

impl core::fmt::Display for Standing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}. {} ({})", self.rank, self.name, self.score)
    }
}
