//! Events emitted by the game host.
//!
//! The host exposes two ports: one reporting that the player renamed
//! themselves, and one reporting that a game ended with a score. A host that
//! already knows the player's label can send a single attributed
//! [`GameCompleted`] instead.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A finished play session, attributed to a player label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameCompleted {
    /// Player label as entered. May be empty.
    #[serde(default)]
    pub name: String,
    /// Final score.
    pub score: f64,
}

impl GameCompleted {
    /// Create a completion event.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// A message from the game host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum HostEvent {
    /// The player-name field changed. Later games are attributed to `name`.
    PlayerRenamed {
        /// The new player label. May be empty.
        name: String,
    },
    /// A game ended. Attributed to the current player name.
    GameOver {
        /// Final score.
        score: f64,
    },
    /// A game ended with an explicit attribution.
    GameCompleted {
        /// Player label as entered. May be empty.
        #[serde(default)]
        name: String,
        /// Final score.
        score: f64,
    },
}
