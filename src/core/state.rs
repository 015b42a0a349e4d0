//! Game state: the single root value the engine owns.
//!
//! ## GameState
//!
//! - Phase and player count
//! - Selected category
//! - Seated players (persistent vector, O(1) clone)
//! - Reveal cursor and the round's secret identity
//!
//! The engine never edits a live state in place: it clones, edits the clone
//! and swaps it in, so every snapshot a caller holds stays consistent.

use std::sync::Arc;

use im::Vector;
use serde::Serialize;

use super::config::GameConfig;
use super::phase::GamePhase;
use super::player::{Player, PlayerId};
use crate::catalog::Category;

/// Complete game state.
///
/// Uses `im` persistent data structures so snapshots are cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Current phase.
    pub phase: GamePhase,

    /// Number of players for the next (or current) round.
    pub player_count: usize,

    /// Category the secret identity is drawn from.
    pub selected_category: Option<Arc<Category>>,

    /// Players in reveal order. Empty until the first round starts.
    pub players: Vector<Player>,

    /// Index of the player whose turn it is to reveal.
    pub current_reveal_index: usize,

    /// The round's secret identity. Empty before a round starts.
    pub selected_identity: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(&GameConfig::default())
    }
}

impl GameState {
    /// The state a fresh (or reset) game starts in.
    #[must_use]
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Setup,
            player_count: config.default_player_count,
            selected_category: None,
            players: Vector::new(),
            current_reveal_index: 0,
            selected_identity: String::new(),
        }
    }

    /// Player whose turn it is, or `None` if the cursor is out of range.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_reveal_index)
    }

    /// Whether the cursor sits on the last player in reveal order.
    #[must_use]
    pub fn is_last_player(&self) -> bool {
        self.players.len().checked_sub(1) == Some(self.current_reveal_index)
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id == id)
    }

    /// The round's impostor, if a round has started.
    #[must_use]
    pub fn impostor(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_impostor)
    }

    /// Number of players whose reveal gate is open.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.players.iter().filter(|p| p.revealed).count()
    }
}
