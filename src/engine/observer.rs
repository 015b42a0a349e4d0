//! Transition events and state observers.
//!
//! A presentation layer re-reads the state after every change. Instead of a
//! reactive framework, it registers a `StateObserver` with the engine and is
//! called once per committed transition.
//!
//! Guarded no-ops (starting without a category, advancing outside the reveal
//! phase, ...) commit nothing and therefore notify nobody.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryId;
use crate::core::{GameState, PlayerId};

/// What a committed transition did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player count was replaced.
    PlayerCountChanged {
        /// New player count.
        count: usize,
    },
    /// A category was selected.
    CategorySelected {
        /// Selected category.
        id: CategoryId,
    },
    /// Players were dealt and the reveal phase began.
    RoundStarted {
        /// Number of seated players.
        player_count: usize,
    },
    /// The current player's reveal gate opened.
    PlayerRevealed {
        /// The player who saw their role.
        player: PlayerId,
    },
    /// The device passed to the next player; every gate is closed again.
    TurnAdvanced {
        /// The player whose turn it now is.
        player: PlayerId,
    },
    /// The last player finished revealing.
    PlayingStarted,
    /// The game went back to its initial state.
    GameReset,
}

/// Receives every committed transition.
///
/// Closures taking `(&GameEvent, &GameState)` are observers:
///
/// ```
/// use impostor_engine::catalog::CategoryCatalog;
/// use impostor_engine::engine::{GameEngine, GameEvent};
///
/// let mut engine = GameEngine::new(CategoryCatalog::new());
/// engine.subscribe(|event: &GameEvent, state: &impostor_engine::core::GameState| {
///     if let GameEvent::PlayerCountChanged { count } = event {
///         assert_eq!(state.player_count, *count);
///     }
/// });
/// engine.set_player_count(6);
/// ```
pub trait StateObserver {
    /// Called after `state` replaced the previous state.
    fn on_transition(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_transition(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state);
    }
}
