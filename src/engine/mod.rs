//! The game engine and its presentation-facing surface.
//!
//! - `GameEngine`: owns the state and performs every transition
//! - `Command`: operations as data, dispatched by `GameEngine::apply`
//! - `StateObserver` / `GameEvent`: notification after each transition
//! - `PhaseView`: what each screen needs to render

pub mod command;
pub mod game;
pub mod observer;
pub mod view;

pub use command::Command;
pub use game::{EngineError, GameEngine, GameEngineBuilder};
pub use observer::{GameEvent, StateObserver};
pub use view::{PhaseView, RevealCard, RoleView, RoundSummary, SetupView};
