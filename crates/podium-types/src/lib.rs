//! Shared type definitions for the Podium leaderboard.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries in the workspace. Types flow downstream to `TypeScript` via
//! `ts-rs` so a display surface can consume standings without re-declaring
//! them.
//!
//! # Modules
//!
//! - [`ids`] -- The [`EntrySeq`] insertion-order sequence number
//! - [`structs`] -- Recorded entries and ranked standings
//! - [`events`] -- Events emitted by the game host

pub mod events;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use events::{GameCompleted, HostEvent};
pub use ids::EntrySeq;
pub use structs::{ScoreEntry, Standing};
