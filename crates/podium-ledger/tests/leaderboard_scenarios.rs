//! End-to-end leaderboard scenarios.
//!
//! Each test drives a fresh [`Leaderboard`] through the public API only.

#![allow(clippy::unwrap_used)]

use podium_ledger::{Leaderboard, LeaderboardError, NamePolicy};
use podium_types::ScoreEntry;

fn summary(entries: &[ScoreEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{}:{}", e.name, e.score))
        .collect()
}

#[test]
fn three_players_rank_by_score() {
    let mut board = Leaderboard::default();
    board.record("Alice", 10.0).unwrap();
    board.record("Bob", 20.0).unwrap();
    board.record("Carol", 15.0).unwrap();

    assert_eq!(summary(&board.top_k(3)), ["Bob:20", "Carol:15", "Alice:10"]);
}

#[test]
fn tied_scores_keep_arrival_order() {
    let mut board = Leaderboard::default();
    board.record("Alice", 10.0).unwrap();
    board.record("Bob", 10.0).unwrap();

    assert_eq!(summary(&board.top_k(2)), ["Alice:10", "Bob:10"]);
}

#[test]
fn unnamed_player_is_anonymous() {
    let mut board = Leaderboard::default();
    board.record("", 5.0).unwrap();

    assert_eq!(summary(&board.top_k(1)), ["Anonymous:5"]);
}

#[test]
fn empty_board_has_no_standings() {
    let board = Leaderboard::default();
    assert!(board.top_k(3).is_empty());
}

#[test]
fn top_two_of_five_games() {
    let mut board = Leaderboard::default();
    for (name, score) in [("A", 8.0), ("B", 31.0), ("C", 4.0), ("D", 27.0), ("E", 12.0)] {
        board.record(name, score).unwrap();
    }

    assert_eq!(summary(&board.top_k(2)), ["B:31", "D:27"]);
}

#[test]
fn nan_score_is_rejected_atomically() {
    let mut board = Leaderboard::default();
    board.record("Alice", 10.0).unwrap();
    let before = board.len();

    let err = board.record("X", f64::NAN).unwrap_err();
    assert!(matches!(err, LeaderboardError::InvalidScore { score } if score.is_nan()));
    assert_eq!(board.len(), before);
}

#[test]
fn whitespace_policy_is_configurable() {
    let mut trimming = Leaderboard::new(NamePolicy::new("Anonymous", true));
    let mut literal = Leaderboard::new(NamePolicy::new("Anonymous", false));
    trimming.record("  ", 1.0).unwrap();
    literal.record("  ", 1.0).unwrap();

    assert_eq!(summary(&trimming.top_k(1)), ["Anonymous:1"]);
    assert_eq!(summary(&literal.top_k(1)), ["  :1"]);
}

#[test]
fn history_grows_by_one_per_valid_record() {
    let mut board = Leaderboard::default();
    for n in 1..=10u32 {
        board.record("p", f64::from(n)).unwrap();
        assert_eq!(board.len(), usize::try_from(n).unwrap());
    }
}

#[test]
fn error_message_names_the_score() {
    let err = LeaderboardError::InvalidScore { score: f64::INFINITY };
    assert_eq!(err.to_string(), "score must be a finite number, got inf");
}
