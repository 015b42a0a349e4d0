//! Core engine types: players, phases, RNG, configuration, state.
//!
//! This module contains the building blocks the engine transitions operate
//! on. It knows nothing about how a presentation renders them.

pub mod config;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameConfig, DEFAULT_PLAYER_COUNT, MAX_PLAYERS, MIN_PLAYERS};
pub use phase::GamePhase;
pub use player::{Identity, Player, PlayerId, IMPOSTOR_LABEL};
pub use rng::GameRng;
pub use state::GameState;
