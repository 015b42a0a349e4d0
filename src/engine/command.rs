//! Commands: engine operations as data.
//!
//! A presentation layer can relay user actions as `Command` values instead
//! of calling engine methods directly, e.g. across a message channel or a
//! web-view bridge. `GameEngine::apply` dispatches them.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryId;

/// A single engine operation.
///
/// ## Example
///
/// ```
/// use impostor_engine::engine::Command;
///
/// let json = serde_json::to_string(&Command::SetPlayerCount(5)).unwrap();
/// assert_eq!(json, r#"{"SetPlayerCount":5}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Replace the player count (unchecked).
    SetPlayerCount(usize),
    /// Select a catalog category by ID.
    SelectCategory(CategoryId),
    /// Raise the player count by one, up to the configured maximum.
    IncrementPlayerCount,
    /// Lower the player count by one, down to the configured minimum.
    DecrementPlayerCount,
    /// Deal a round.
    StartGame,
    /// Open the current player's reveal gate.
    RevealCurrentPlayer,
    /// Pass the device on, or start playing after the last player.
    NextPlayer,
    /// Return to the initial state.
    ResetGame,
}
