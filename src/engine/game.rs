//! The game engine: owner of the state and every transition.
//!
//! ## Transitions
//!
//! | From    | Operation         | To      | Guard                           |
//! |---------|-------------------|---------|---------------------------------|
//! | Setup   | `start_game`      | Reveal  | category selected, enough seats |
//! | Reveal  | `start_game`      | Reveal  | same; redeals the round         |
//! | Reveal  | `next_player`     | Reveal  | players remain                  |
//! | Reveal  | `next_player`     | Playing | current player is the last      |
//! | any     | `reset_game`      | Setup   | none                            |
//!
//! A call whose guard fails is a silent no-op: the state is untouched and no
//! observer is notified.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, trace};

use super::command::Command;
use super::observer::{GameEvent, StateObserver};
use super::view::{PhaseView, RevealCard, RoundSummary, SetupView};
use crate::catalog::{CatalogError, Category, CategoryCatalog, CategoryId};
use crate::core::{ConfigError, GameConfig, GamePhase, GameRng, GameState, Player, PlayerId};

/// Errors building an engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A category could not be added to the catalog.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Builder for a [`GameEngine`].
///
/// ## Example
///
/// ```
/// use impostor_engine::catalog::{Category, CategoryId};
/// use impostor_engine::core::{GameConfig, GamePhase};
/// use impostor_engine::engine::GameEngine;
///
/// let mut engine = GameEngine::builder()
///     .category(Category::new(CategoryId::new(1), "Pirates", "🏴‍☠️", ["Blackbeard"]).unwrap())
///     .config(GameConfig::default())
///     .seed(42)
///     .build()
///     .unwrap();
///
/// engine.select_category(CategoryId::new(1));
/// engine.start_game();
/// assert_eq!(engine.state().phase, GamePhase::Reveal);
/// ```
#[derive(Debug, Default)]
pub struct GameEngineBuilder {
    catalog: CategoryCatalog,
    categories: Vec<Category>,
    config: GameConfig,
    seed: Option<u64>,
}

impl GameEngineBuilder {
    /// Create a builder with the default configuration and an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Append a category after those already in the catalog.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Set the configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the random source for reproducible rounds.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the engine.
    pub fn build(self) -> Result<GameEngine, EngineError> {
        self.config.validate()?;

        let mut catalog = self.catalog;
        for category in self.categories {
            catalog.register(category)?;
        }

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(categories = catalog.len(), seed = rng.seed(), "engine built");

        Ok(GameEngine::from_parts(self.config, catalog, rng))
    }
}

/// Finite-state controller for one table of players.
///
/// Created once by the composition point and handed to the presentation
/// code by reference.
pub struct GameEngine {
    config: GameConfig,
    catalog: CategoryCatalog,
    rng: GameRng,
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Create an engine with the default configuration and an entropy-seeded
    /// random source.
    #[must_use]
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self::from_parts(GameConfig::default(), catalog, GameRng::from_entropy())
    }

    /// Start building an engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    fn from_parts(config: GameConfig, catalog: CategoryCatalog, rng: GameRng) -> Self {
        let state = GameState::initial(&config);
        Self {
            config,
            catalog,
            rng,
            state,
            observers: Vec::new(),
        }
    }

    // === Reads ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Player whose turn it is to reveal, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// Whether the current player is the last in reveal order.
    #[must_use]
    pub fn is_last_player(&self) -> bool {
        self.state.is_last_player()
    }

    /// The categories on offer.
    #[must_use]
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Register an observer called after every committed transition.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Setup ===

    /// Replace the player count.
    ///
    /// Unchecked: the setup controls keep the count in bounds.
    pub fn set_player_count(&mut self, count: usize) {
        let next = GameState {
            player_count: count,
            ..self.state.clone()
        };
        trace!(count, "player count set");
        self.commit(next, GameEvent::PlayerCountChanged { count });
    }

    /// Replace the selected category. The catalog is not consulted.
    pub fn set_selected_category(&mut self, category: Arc<Category>) {
        let id = category.id();
        let next = GameState {
            selected_category: Some(category),
            ..self.state.clone()
        };
        trace!(category = %id, "category selected");
        self.commit(next, GameEvent::CategorySelected { id });
    }

    /// Select a catalog category by ID. Unknown IDs are ignored.
    pub fn select_category(&mut self, id: CategoryId) {
        match self.catalog.get(id).cloned() {
            Some(category) => self.set_selected_category(category),
            None => debug!(category = %id, "selection ignored: unknown category"),
        }
    }

    /// Whether the increment control is enabled.
    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.state.player_count < self.config.max_players
    }

    /// Whether the decrement control is enabled.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.state.player_count > self.config.min_players
    }

    /// Raise the player count by one, never past the configured maximum.
    pub fn increment_player_count(&mut self) {
        if !self.can_increment() {
            return;
        }
        let count = (self.state.player_count + 1).min(self.config.max_players);
        self.set_player_count(count);
    }

    /// Lower the player count by one, never below the configured minimum.
    pub fn decrement_player_count(&mut self) {
        if !self.can_decrement() {
            return;
        }
        let count = (self.state.player_count - 1).max(self.config.min_players);
        self.set_player_count(count);
    }

    /// Whether `start_game` would deal a round.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state.selected_category.is_some() && self.state.player_count >= self.config.min_players
    }

    // === Round ===

    /// Deal a round: draw the secret identity and the impostor seat.
    ///
    /// No-op without a selected category, with too few players, or once play
    /// has started. Calling it again during the reveal redraws both.
    ///
    /// A round in play is never redealt: the only way from `Playing` back to
    /// an earlier phase is `reset_game`.
    pub fn start_game(&mut self) {
        if self.state.phase == GamePhase::Playing {
            debug!("start ignored: round in play");
            return;
        }
        let Some(category) = self.state.selected_category.clone() else {
            debug!("start ignored: no category selected");
            return;
        };
        let player_count = self.state.player_count;
        if player_count < self.config.min_players {
            debug!(player_count, "start ignored: not enough players");
            return;
        }

        let Some(identity) = self.rng.choose(category.identities()).cloned() else {
            return;
        };
        let Some(impostor_index) = self.rng.gen_index(player_count) else {
            return;
        };

        let players = PlayerId::all(player_count)
            .map(|id| {
                if id.index() == impostor_index {
                    Player::impostor(id)
                } else {
                    Player::civilian(id, identity.clone())
                }
            })
            .collect();

        let next = GameState {
            phase: GamePhase::Reveal,
            players,
            current_reveal_index: 0,
            selected_identity: identity,
            ..self.state.clone()
        };
        info!(player_count, category = %category.id(), "round started");
        self.commit(next, GameEvent::RoundStarted { player_count });
    }

    /// Open the current player's reveal gate. Idempotent.
    ///
    /// No-op outside the reveal phase or if the cursor is out of range.
    pub fn reveal_current_player(&mut self) {
        if self.state.phase != GamePhase::Reveal {
            debug!(phase = %self.state.phase, "reveal ignored");
            return;
        }
        let index = self.state.current_reveal_index;
        let Some(player) = self.state.players.get(index).map(|p| p.id) else {
            return;
        };

        let mut next = self.state.clone();
        if let Some(p) = next.players.get_mut(index) {
            p.revealed = true;
        }
        trace!(%player, "player revealed");
        self.commit(next, GameEvent::PlayerRevealed { player });
    }

    /// Pass the device to the next player, closing every reveal gate.
    ///
    /// On the last player this starts the playing phase instead, leaving the
    /// players and cursor as they are. No-op outside the reveal phase.
    pub fn next_player(&mut self) {
        if self.state.phase != GamePhase::Reveal {
            debug!(phase = %self.state.phase, "next player ignored");
            return;
        }

        let mut next = self.state.clone();
        let next_index = self.state.current_reveal_index + 1;

        let event = if next_index < self.state.players.len() {
            next.current_reveal_index = next_index;
            for p in next.players.iter_mut() {
                p.revealed = false;
            }
            GameEvent::TurnAdvanced {
                player: PlayerId::from_index(next_index),
            }
        } else {
            next.phase = GamePhase::Playing;
            info!(player_count = next.players.len(), "all players revealed");
            GameEvent::PlayingStarted
        };
        trace!(?event, "reveal advanced");
        self.commit(next, event);
    }

    /// Discard everything and return to the initial state.
    pub fn reset_game(&mut self) {
        info!(phase = %self.state.phase, "game reset");
        self.commit(GameState::initial(&self.config), GameEvent::GameReset);
    }

    /// Dispatch a command to its operation.
    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::SetPlayerCount(count) => self.set_player_count(count),
            Command::SelectCategory(id) => self.select_category(id),
            Command::IncrementPlayerCount => self.increment_player_count(),
            Command::DecrementPlayerCount => self.decrement_player_count(),
            Command::StartGame => self.start_game(),
            Command::RevealCurrentPlayer => self.reveal_current_player(),
            Command::NextPlayer => self.next_player(),
            Command::ResetGame => self.reset_game(),
        }
    }

    // === Views ===

    /// What the presentation should render, or `None` if nothing.
    #[must_use]
    pub fn view(&self) -> Option<PhaseView> {
        match self.state.phase {
            GamePhase::Setup => Some(PhaseView::Setup(SetupView {
                player_count: self.state.player_count,
                selected_category: self.state.selected_category.as_ref().map(|c| c.id()),
                can_start: self.can_start(),
                can_increment: self.can_increment(),
                can_decrement: self.can_decrement(),
            })),
            GamePhase::Reveal => self
                .current_player()
                .map(|p| PhaseView::Reveal(RevealCard::new(p, self.is_last_player()))),
            GamePhase::Playing => self.state.selected_category.as_ref().map(|c| {
                PhaseView::Playing(RoundSummary {
                    player_count: self.state.player_count,
                    impostor_count: self.state.players.iter().filter(|p| p.is_impostor).count(),
                    category_name: c.name().to_string(),
                })
            }),
        }
    }

    fn commit(&mut self, next: GameState, event: GameEvent) {
        self.state = next;
        for observer in &mut self.observers {
            observer.on_transition(&event, &self.state);
        }
    }
}
