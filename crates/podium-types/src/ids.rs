//! Insertion-order sequence numbers for recorded entries.
//!
//! Every entry appended to a leaderboard receives the next [`EntrySeq`].
//! Sequence numbers are never reused within one leaderboard and are the
//! only tie-break key between equal scores: a lower sequence means the
//! score was achieved earlier and ranks first.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Logical insertion order of a [`ScoreEntry`](crate::ScoreEntry).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct EntrySeq(pub u64);

impl EntrySeq {
    /// The sequence number assigned to the first entry of a leaderboard.
    pub const FIRST: Self = Self(0);

    /// Return the sequence number that follows this one, or `None` if the
    /// sequence space is exhausted.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Return the inner counter value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EntrySeq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EntrySeq {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
