//! # impostor-engine
//!
//! Game engine for a pass-the-device impostor party game.
//!
//! One device goes around the table. Every player is shown the same secret
//! identity, drawn from a chosen category, except one: the impostor, who
//! has to bluff.
//!
//! ## Design Principles
//!
//! 1. **Linear phases**: `Setup` → `Reveal` → `Playing`, with a full reset
//!    as the only way back.
//!
//! 2. **Silent guards**: an operation whose preconditions do not hold
//!    leaves the state untouched instead of failing.
//!
//! 3. **Whole-state commits**: every transition builds a complete next
//!    state and swaps it in. Persistent structures (`im`) keep snapshots
//!    O(1).
//!
//! ## Modules
//!
//! - `core`: Player IDs, identities, phases, RNG, configuration, state
//! - `catalog`: Categories and the ordered catalog
//! - `engine`: The engine, commands, observers, phase views

pub mod catalog;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GamePhase, GameRng, GameState, Identity, Player, PlayerId,
    IMPOSTOR_LABEL,
};

pub use crate::catalog::{CatalogError, Category, CategoryCatalog, CategoryId};

pub use crate::engine::{
    Command, EngineError, GameEngine, GameEngineBuilder, GameEvent, PhaseView, RevealCard,
    RoleView, RoundSummary, SetupView, StateObserver,
};
