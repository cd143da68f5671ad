//! Observer hooks for board changes.
//!
//! The leaderboard itself never notifies anyone. A display surface that
//! needs to redraw when a game is recorded registers a [`BoardCallback`] on
//! the [`Scoreboard`](crate::scoreboard::Scoreboard) that owns it.

use podium_ledger::Leaderboard;
use podium_types::ScoreEntry;

/// Callback invoked after every successfully recorded game.
pub trait BoardCallback: Send {
    /// Called with the new entry and the leaderboard that now contains it.
    fn on_recorded(&mut self, entry: &ScoreEntry, board: &Leaderboard);
}

/// A no-op board callback for testing.
pub struct NoOpCallback;

impl BoardCallback for NoOpCallback {
    fn on_recorded(&mut self, _entry: &ScoreEntry, _board: &Leaderboard) {}
}

impl<F> BoardCallback for F
where
    F: FnMut(&ScoreEntry, &Leaderboard) + Send,
{
    fn on_recorded(&mut self, entry: &ScoreEntry, board: &Leaderboard) {
        self(entry, board);
    }
}
