//! Thread-safe handle to a [`Leaderboard`].
//!
//! Writers are serialized behind the write lock. Readers share the read
//! lock, so a ranking query always sees a whole number of appends.
//!
//! A poisoned lock is recovered rather than propagated: `record` appends as
//! its last step, so a panic while holding the lock cannot leave a partial
//! entry behind.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use podium_types::ScoreEntry;

use crate::leaderboard::Leaderboard;
use crate::policy::NamePolicy;
use crate::LeaderboardError;

/// Cloneable, lock-guarded handle to a single [`Leaderboard`].
#[derive(Debug, Clone, Default)]
pub struct SharedLeaderboard {
    inner: Arc<RwLock<Leaderboard>>,
}

impl SharedLeaderboard {
    /// Create a handle to a new empty leaderboard.
    pub fn new(policy: NamePolicy) -> Self {
        Self::from(Leaderboard::new(policy))
    }

    /// Record a completed game and return a copy of the stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidScore`] if `score` is not finite.
    pub fn record(&self, name: &str, score: f64) -> Result<ScoreEntry, LeaderboardError> {
        self.write().record(name, score).cloned()
    }

    /// Return the `k` best-ranked entries, best first.
    pub fn top_k(&self, k: usize) -> Vec<ScoreEntry> {
        self.read().top_k(k)
    }

    /// Return the number of recorded entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Return whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Return a copy of the full history in insertion order.
    pub fn snapshot(&self) -> Vec<ScoreEntry> {
        self.read().entries().to_vec()
    }

    fn read(&self) -> RwLockReadGuard<'_, Leaderboard> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Leaderboard> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Leaderboard> for SharedLeaderboard {
    fn from(board: Leaderboard) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }
}
