//! Game phases.

use serde::{Deserialize, Serialize};

/// Phase of a game.
///
/// Phases only move forward (`Setup` → `Reveal` → `Playing`); the single
/// way back is a full reset to `Setup`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choosing player count and category.
    #[default]
    Setup,
    /// Passing the device around, one player at a time.
    Reveal,
    /// Everyone knows their role; discussion and voting happen off-device.
    Playing,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "setup",
            GamePhase::Reveal => "reveal",
            GamePhase::Playing => "playing",
        };
        f.write_str(name)
    }
}
