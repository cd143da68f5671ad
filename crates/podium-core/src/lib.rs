//! Configuration, player session, and observer hooks for the Podium
//! leaderboard.
//!
//! This crate wires a [`Leaderboard`] to the game host: it tracks the
//! current player name, turns host events into recorded games, and tells
//! registered observers when the board changes.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `podium-config.yaml` into
//!   strongly-typed structs.
//! - [`callback`] -- [`BoardCallback`] trait and [`NoOpCallback`].
//! - [`scoreboard`] -- [`Scoreboard`]: one leaderboard plus the player
//!   session feeding it.
//!
//! [`Leaderboard`]: podium_ledger::Leaderboard
//! [`BoardCallback`]: callback::BoardCallback
//! [`NoOpCallback`]: callback::NoOpCallback
//! [`Scoreboard`]: scoreboard::Scoreboard

pub mod callback;
pub mod config;
pub mod scoreboard;
