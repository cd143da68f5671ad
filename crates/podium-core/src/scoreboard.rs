//! A leaderboard together with the player session that feeds it.
//!
//! The game host reports two things: the player renamed themselves, and a
//! game ended with some score. [`Scoreboard`] keeps the current name, records
//! each finished game under it, and hands the result to every registered
//! [`BoardCallback`].

use tracing::{debug, info};

use podium_ledger::{Leaderboard, LeaderboardError};
use podium_types::{GameCompleted, HostEvent, ScoreEntry, Standing};

use crate::callback::BoardCallback;
use crate::config::PodiumConfig;

/// One leaderboard, the current player name, and the observers to notify.
pub struct Scoreboard {
    leaderboard: Leaderboard,
    player_name: String,
    board_size: usize,
    callbacks: Vec<Box<dyn BoardCallback>>,
}

impl Scoreboard {
    /// Create an empty scoreboard from configuration.
    pub fn new(config: &PodiumConfig) -> Self {
        Self::with_leaderboard(
            Leaderboard::new(config.board.name_policy()),
            config.board.size,
            config.player.initial_name.clone(),
        )
    }

    /// Wrap an existing leaderboard.
    pub fn with_leaderboard(
        leaderboard: Leaderboard,
        board_size: usize,
        player_name: String,
    ) -> Self {
        Self {
            leaderboard,
            player_name,
            board_size,
            callbacks: Vec::new(),
        }
    }

    /// Register an observer notified after every recorded game.
    pub fn register(&mut self, callback: Box<dyn BoardCallback>) {
        self.callbacks.push(callback);
    }

    /// Return the underlying leaderboard.
    pub const fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Return the current player name as entered. May be empty.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Replace the current player name. Games already recorded keep the
    /// label they were recorded with.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
        debug!(player = %self.player_name, "Player name changed");
    }

    /// Return the number of standings shown by [`Scoreboard::standings`].
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Record a game that ended with `score` under the current player name.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidScore`] if `score` is not finite.
    pub fn game_over(&mut self, score: f64) -> Result<ScoreEntry, LeaderboardError> {
        let name = self.player_name.clone();
        self.record_game(&name, score)
    }

    /// Record an attributed game completion.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidScore`] if the score is not finite.
    pub fn record(&mut self, event: &GameCompleted) -> Result<ScoreEntry, LeaderboardError> {
        self.record_game(&event.name, event.score)
    }

    /// Apply a host event. Returns the recorded entry for game events and
    /// `None` for renames.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::InvalidScore`] if a game event carries a
    /// non-finite score.
    pub fn apply(&mut self, event: &HostEvent) -> Result<Option<ScoreEntry>, LeaderboardError> {
        match event {
            HostEvent::PlayerRenamed { name } => {
                self.set_player_name(name.clone());
                Ok(None)
            }
            HostEvent::GameOver { score } => self.game_over(*score).map(Some),
            HostEvent::GameCompleted { name, score } => self.record_game(name, *score).map(Some),
        }
    }

    /// Return the top [`Scoreboard::board_size`] standings.
    pub fn standings(&self) -> Vec<Standing> {
        self.standings_for(self.board_size)
    }

    /// Return the top `k` standings, ranked from 1.
    pub fn standings_for(&self, k: usize) -> Vec<Standing> {
        self.leaderboard
            .top_k(k)
            .iter()
            .zip(1u32..)
            .map(|(entry, rank)| Standing::new(rank, entry))
            .collect()
    }

    fn record_game(&mut self, name: &str, score: f64) -> Result<ScoreEntry, LeaderboardError> {
        let entry = self.leaderboard.record(name, score)?.clone();
        info!(
            seq = %entry.seq,
            player = %entry.name,
            score = entry.score,
            games = self.leaderboard.len(),
            "Game recorded"
        );
        for callback in &mut self.callbacks {
            callback.on_recorded(&entry, &self.leaderboard);
        }
        Ok(entry)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(&PodiumConfig::default())
    }
}

impl core::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scoreboard")
            .field("leaderboard", &self.leaderboard)
            .field("player_name", &self.player_name)
            .field("board_size", &self.board_size)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::callback::NoOpCallback;

    fn names(standings: &[Standing]) -> Vec<&str> {
        standings.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn game_over_uses_current_player_name() {
        let mut board = Scoreboard::default();
        board.set_player_name("Alice");
        let entry = board.game_over(12.0);
        assert_eq!(entry.map(|e| e.name), Ok("Alice".to_owned()));
    }

    #[test]
    fn game_over_without_name_is_anonymous() {
        let mut board = Scoreboard::default();
        let _ = board.game_over(4.0);
        assert_eq!(names(&board.standings()), vec!["Anonymous"]);
    }

    #[test]
    fn rename_does_not_touch_recorded_games() {
        let mut board = Scoreboard::default();
        board.set_player_name("Alice");
        let _ = board.game_over(10.0);
        board.set_player_name("Bob");
        let _ = board.game_over(5.0);
        assert_eq!(names(&board.standings()), vec!["Alice", "Bob"]);
    }

    #[test]
    fn standings_are_capped_at_board_size() {
        let mut board = Scoreboard::default();
        for score in [1.0, 2.0, 3.0, 4.0, 5.0] {
            let _ = board.record(&GameCompleted::new("p", score));
        }
        let standings = board.standings();
        assert_eq!(standings.len(), 3);
        let ranks: Vec<u32> = standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(board.standings_for(10).len(), 5);
        assert!(board.standings_for(0).is_empty());
    }

    #[test]
    fn apply_dispatches_host_events() {
        let mut board = Scoreboard::default();
        let renamed = board.apply(&HostEvent::PlayerRenamed {
            name: "Carol".to_owned(),
        });
        assert_eq!(renamed, Ok(None));
        assert_eq!(board.player_name(), "Carol");

        let over = board.apply(&HostEvent::GameOver { score: 15.0 });
        assert_eq!(over.map(|e| e.map(|e| e.name)), Ok(Some("Carol".to_owned())));

        let completed = board.apply(&HostEvent::GameCompleted {
            name: "Dave".to_owned(),
            score: 20.0,
        });
        assert_eq!(completed.map(|e| e.map(|e| e.name)), Ok(Some("Dave".to_owned())));

        assert_eq!(names(&board.standings()), vec!["Dave", "Carol"]);
    }

    #[test]
    fn callbacks_see_each_recorded_game() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut board = Scoreboard::default();
        board.register(Box::new(NoOpCallback));
        board.register(Box::new(move |entry: &ScoreEntry, lb: &Leaderboard| {
            if let Ok(mut seen) = sink.lock() {
                seen.push((entry.name.clone(), lb.len()));
            }
        }));

        let _ = board.record(&GameCompleted::new("Alice", 1.0));
        let _ = board.record(&GameCompleted::new("Bob", 2.0));

        let seen = seen.lock().map(|s| s.clone()).unwrap_or_default();
        assert_eq!(
            seen,
            vec![("Alice".to_owned(), 1), ("Bob".to_owned(), 2)]
        );
    }

    #[test]
    fn rejected_score_notifies_nobody() {
        let calls = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&calls);

        let mut board = Scoreboard::default();
        board.register(Box::new(move |_: &ScoreEntry, _: &Leaderboard| {
            if let Ok(mut n) = counter.lock() {
                *n = n.saturating_add(1);
            }
        }));

        assert!(board.game_over(f64::NAN).is_err());
        assert_eq!(calls.lock().map(|n| *n).unwrap_or(u32::MAX), 0);
        assert!(board.leaderboard().is_empty());
    }

    #[test]
    fn config_controls_label_and_size() {
        let config = PodiumConfig::parse(
            r#"
board:
  default_label: "Guest"
  size: 1
player:
  initial_name: "Eve"
"#,
        )
        .unwrap_or_default();
        let mut board = Scoreboard::new(&config);
        assert_eq!(board.player_name(), "Eve");
        let _ = board.game_over(3.0);
        let _ = board.record(&GameCompleted::new("", 9.0));
        assert_eq!(names(&board.standings()), vec!["Guest"]);
    }
}
