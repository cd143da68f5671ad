//! Replays newline-delimited JSON host events through a [`Scoreboard`].
//!
//! Each non-blank line must be one [`HostEvent`]. Lines that fail to parse
//! are logged and skipped; the replay only stops on an I/O error. JSON has
//! no NaN or infinity and out-of-range numbers fail to parse, so a bad score
//! in the input surfaces as a malformed line.

use podium_core::scoreboard::Scoreboard;
use podium_ledger::LeaderboardError;
use podium_types::{HostEvent, ScoreEntry};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::EngineError;

/// What happened to a single input line.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    /// The line was empty or whitespace.
    Blank,
    /// The player name changed.
    Renamed,
    /// A game was recorded.
    Recorded(ScoreEntry),
    /// The line was not a valid host event.
    Malformed(String),
    /// The leaderboard rejected the game. Unreachable from JSON text; kept
    /// for events parsed by callers that allow non-finite numbers.
    Rejected(LeaderboardError),
}

/// Counters for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Lines read, including blank ones.
    pub lines: u64,
    /// Games recorded.
    pub recorded: u64,
    /// Player renames applied.
    pub renamed: u64,
    /// Lines skipped as malformed or rejected.
    pub skipped: u64,
}

impl ReplayStats {
    fn count(&mut self, outcome: &LineOutcome) {
        self.lines = self.lines.saturating_add(1);
        match outcome {
            LineOutcome::Blank => {}
            LineOutcome::Renamed => self.renamed = self.renamed.saturating_add(1),
            LineOutcome::Recorded(_) => self.recorded = self.recorded.saturating_add(1),
            LineOutcome::Malformed(_) | LineOutcome::Rejected(_) => {
                self.skipped = self.skipped.saturating_add(1);
            }
        }
    }
}

/// Parse one input line and apply it to `board`.
pub fn apply_line(board: &mut Scoreboard, line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let event: HostEvent = match serde_json::from_str(line) {
        Ok(event) => event,
        Err(e) => return LineOutcome::Malformed(e.to_string()),
    };

    match board.apply(&event) {
        Ok(Some(entry)) => LineOutcome::Recorded(entry),
        Ok(None) => LineOutcome::Renamed,
        Err(e) => LineOutcome::Rejected(e),
    }
}

/// Read host events from `reader` until end of input.
///
/// # Errors
///
/// Returns [`EngineError::Io`] if reading from `reader` fails.
pub async fn replay<R>(reader: R, board: &mut Scoreboard) -> Result<ReplayStats, EngineError>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = ReplayStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let outcome = apply_line(board, &line);
        match &outcome {
            LineOutcome::Malformed(reason) => {
                warn!(line = stats.lines.saturating_add(1), error = %reason, "Skipping malformed host event");
            }
            // Non-finite scores cannot arrive through JSON text.
            LineOutcome::Rejected(e) => {
                warn!(line = stats.lines.saturating_add(1), error = %e, "Skipping rejected game");
            }
            LineOutcome::Recorded(entry) => {
                debug!(seq = %entry.seq, player = %entry.name, "Host event applied");
            }
            LineOutcome::Blank | LineOutcome::Renamed => {}
        }
        stats.count(&outcome);
    }

    Ok(stats)
}
