//! Game configuration.
//!
//! `GameConfig` holds the player-count bounds enforced by the setup controls
//! and the player count a fresh game starts with. It is plain data so callers
//! can load it from any `serde` format before building an engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest table that can hold one impostor and one civilian.
pub const MIN_PLAYERS: usize = 2;

/// Default upper bound for the setup controls.
pub const MAX_PLAYERS: usize = 10;

/// Player count of a freshly created or reset game.
pub const DEFAULT_PLAYER_COUNT: usize = 4;

/// Configuration rejected by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The minimum leaves no room for a civilian.
    #[error("minimum player count {0} is below {min}", min = MIN_PLAYERS)]
    MinPlayersTooLow(usize),

    /// `min_players` is greater than `max_players`.
    #[error("minimum player count {min} exceeds maximum {max}")]
    BoundsInverted {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The default player count lies outside `[min_players, max_players]`.
    #[error("default player count {default} is outside {min}..={max}")]
    DefaultOutOfBounds {
        /// Configured default.
        default: usize,
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use impostor_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_max_players(8);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.default_player_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player count of the initial (and every reset) state.
    pub default_player_count: usize,

    /// Lowest count the decrement control reaches; also the start guard.
    pub min_players: usize,

    /// Highest count the increment control reaches.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_player_count: DEFAULT_PLAYER_COUNT,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting player count.
    #[must_use]
    pub fn with_default_player_count(mut self, count: usize) -> Self {
        self.default_player_count = count;
        self
    }

    /// Set the lower player-count bound.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the upper player-count bound.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Check the bounds are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max, default) = (self.min_players, self.max_players, self.default_player_count);

        if min < MIN_PLAYERS {
            return Err(ConfigError::MinPlayersTooLow(min));
        }
        if min > max {
            return Err(ConfigError::BoundsInverted { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(ConfigError::DefaultOutOfBounds { default, min, max });
        }
        Ok(())
    }
}
