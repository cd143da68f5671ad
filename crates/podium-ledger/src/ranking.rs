//! Ordering rules and bounded top-K selection.
//!
//! [`rank_order`] is the single definition of "ranks ahead of". Scores are
//! compared with [`f64::total_cmp`]; recorded scores are always finite and
//! never negative zero, so this agrees with numeric comparison. Ties fall
//! back to the insertion sequence, which is unique per leaderboard, making
//! the order total.

use core::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use podium_types::ScoreEntry;

/// Compare two entries by rank. [`Ordering::Less`] means `a` ranks ahead of
/// `b`.
pub fn rank_order(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.seq.cmp(&b.seq))
}

/// Heap key where "greater" means "ranks ahead".
#[derive(Debug)]
struct Ranked<'a>(&'a ScoreEntry);

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(other.0, self.0)
    }
}

/// Select the `k` best-ranked entries, best first.
///
/// When `k` covers every entry the whole slice is sorted. Otherwise a
/// min-heap holding the current best `k` is maintained in a single pass, so
/// large histories cost O(n log k).
pub fn top_k(entries: &[ScoreEntry], k: usize) -> Vec<&ScoreEntry> {
    if k == 0 {
        return Vec::new();
    }

    if k >= entries.len() {
        let mut all: Vec<&ScoreEntry> = entries.iter().collect();
        all.sort_unstable_by(|a, b| rank_order(a, b));
        return all;
    }

    // Root of the heap is the worst entry currently kept.
    let mut heap: BinaryHeap<Reverse<Ranked<'_>>> = BinaryHeap::with_capacity(k);
    for entry in entries {
        let candidate = Ranked(entry);
        if heap.len() < k {
            heap.push(Reverse(candidate));
        } else if heap.peek().is_some_and(|worst| candidate > worst.0) {
            heap.pop();
            heap.push(Reverse(candidate));
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(Ranked(entry))| entry)
        .collect()
}
