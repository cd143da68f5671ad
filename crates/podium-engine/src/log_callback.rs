//! Board callback that logs the current standings.
//!
//! Stands in for a display surface: after every recorded game it ranks the
//! board and emits the standings as a structured log event.

use podium_core::callback::BoardCallback;
use podium_ledger::Leaderboard;
use podium_types::{ScoreEntry, Standing};
use tracing::info;

/// Callback that logs the top standings after each recorded game.
pub struct LogCallback {
    board_size: usize,
}

impl LogCallback {
    /// Create a callback that logs the top `board_size` standings.
    pub const fn new(board_size: usize) -> Self {
        Self { board_size }
    }
}

impl BoardCallback for LogCallback {
    fn on_recorded(&mut self, entry: &ScoreEntry, board: &Leaderboard) {
        let standings: Vec<String> = board
            .top_k(self.board_size)
            .iter()
            .zip(1u32..)
            .map(|(e, rank)| Standing::new(rank, e).to_string())
            .collect();
        info!(
            seq = %entry.seq,
            games = board.len(),
            standings = ?standings,
            "Standings updated"
        );
    }
}
