//! The leaderboard: an append-only log of completed games.
//!
//! The [`Leaderboard`] struct holds every [`ScoreEntry`] recorded during its
//! lifetime and answers ranked queries over them.
//!
//! # Design
//!
//! - **Append-only**: entries are never modified or deleted.
//! - **Atomic rejection**: an invalid score leaves the history untouched.
//! - **Derived ranking**: [`Leaderboard::top_k`] computes a fresh ranking on
//!   every call; nothing ranked is stored.
//! - **Quiet**: the leaderboard notifies nobody. Callers that redraw on new
//!   scores observe them one layer up.

use chrono::Utc;
use tracing::{debug, warn};

use podium_types::{EntrySeq, ScoreEntry};

use crate::policy::NamePolicy;
use crate::ranking;
use crate::LeaderboardError;

/// Append-only history of completed games with top-K ranking.
#[derive(Debug, Default)]
pub struct Leaderboard {
    /// All entries, in insertion order.
    entries: Vec<ScoreEntry>,
    /// Default-label substitution for blank names.
    policy: NamePolicy,
    /// Sequence number for the next recorded entry.
    next_seq: EntrySeq,
}

impl Leaderboard {
    /// Create an empty leaderboard with the given name policy.
    pub const fn new(policy: NamePolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            next_seq: EntrySeq::FIRST,
        }
    }

    /// Create an empty leaderboard that substitutes `label` for blank names.
    pub fn with_default_label(label: impl Into<String>) -> Self {
        Self::new(NamePolicy::new(label, true))
    }

    /// Return the name policy this leaderboard was built with.
    pub const fn policy(&self) -> &NamePolicy {
        &self.policy
    }

    /// Return the number of recorded entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether nothing has been recorded yet.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the full history in insertion order.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Look up an entry by its sequence number.
    pub fn get(&self, seq: EntrySeq) -> Option<&ScoreEntry> {
        self.entries
            .binary_search_by_key(&seq, |e| e.seq)
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    /// Record a completed game.
    ///
    /// Blank names are replaced according to the [`NamePolicy`]. Negative
    /// zero is stored as zero so it ties with zero.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidScore`] if `score` is NaN or
    /// infinite. Nothing is recorded in that case.
    pub fn record(&mut self, name: &str, score: f64) -> Result<&ScoreEntry, LeaderboardError> {
        if !score.is_finite() {
            warn!(player = name, score, "Rejected non-finite score");
            return Err(LeaderboardError::InvalidScore { score });
        }

        let seq = self.next_seq;
        let next_seq = seq.next().ok_or(LeaderboardError::SequenceExhausted {
            recorded: self.entries.len(),
        })?;

        let entry = ScoreEntry {
            seq,
            name: self.policy.label(name),
            score: score + 0.0,
            recorded_at: Utc::now(),
        };

        debug!(seq = %entry.seq, player = %entry.name, score = entry.score, "Score recorded");

        self.next_seq = next_seq;
        self.entries.push(entry);

        self.entries.last().ok_or(LeaderboardError::InternalError(
            "failed to retrieve entry after append",
        ))
    }

    /// Return the `k` best-ranked entries, best first.
    ///
    /// Entries rank by score, highest first, then by insertion order. At
    /// most `min(k, len)` entries are returned; `k == 0` or an empty history
    /// yields an empty vector.
    pub fn top_k(&self, k: usize) -> Vec<ScoreEntry> {
        ranking::top_k(&self.entries, k)
            .into_iter()
            .cloned()
            .collect()
    }
}
