//! Property tests for the engine invariants.

use impostor_engine::catalog::{Category, CategoryId};
use impostor_engine::core::{GamePhase, GameState};
use impostor_engine::engine::{Command, GameEngine};
use proptest::prelude::*;

fn engine_with(identities: Vec<String>, seed: u64) -> GameEngine {
    let category = Category::new(CategoryId::new(1), "Pool", "*", identities).unwrap();
    let mut engine = GameEngine::builder().category(category).seed(seed).build().unwrap();
    engine.select_category(CategoryId::new(1));
    engine
}

fn identities() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..12)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..14).prop_map(Command::SetPlayerCount),
        (0u32..3).prop_map(|id| Command::SelectCategory(CategoryId::new(id))),
        Just(Command::IncrementPlayerCount),
        Just(Command::DecrementPlayerCount),
        Just(Command::StartGame),
        Just(Command::RevealCurrentPlayer),
        Just(Command::NextPlayer),
        Just(Command::ResetGame),
    ]
}

/// Round invariants that must hold whenever players are seated.
fn check_round(state: &GameState) -> Result<(), TestCaseError> {
    if state.players.is_empty() {
        return Ok(());
    }
    let category = state.selected_category.as_ref().unwrap();

    prop_assert_eq!(state.players.iter().filter(|p| p.is_impostor).count(), 1);
    prop_assert!(category.contains(&state.selected_identity));
    for p in state.players.iter() {
        match p.identity.secret() {
            Some(secret) => {
                prop_assert_eq!(secret, state.selected_identity.as_str());
            }
            None => {
                prop_assert!(p.is_impostor);
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Exactly one impostor; everyone else holds the drawn identity.
    #[test]
    fn prop_start_deals_one_impostor(
        player_count in 2usize..=10,
        identities in identities(),
        seed in any::<u64>()
    ) {
        let mut engine = engine_with(identities, seed);
        engine.set_player_count(player_count);
        engine.start_game();

        let state = engine.state();
        prop_assert_eq!(state.phase, GamePhase::Reveal);
        prop_assert_eq!(state.players.len(), player_count);
        check_round(state)?;

        let impostor = state.impostor().unwrap();
        prop_assert_ne!(impostor.identity.as_str(), "");
        prop_assert!(impostor.identity.secret() != Some(state.selected_identity.as_str()));
    }

    /// Revealing touches only the current player's gate.
    #[test]
    fn prop_reveal_touches_only_current(
        player_count in 2usize..=10,
        advances in 0usize..10,
        seed in any::<u64>()
    ) {
        let mut engine = engine_with(vec!["x".to_string()], seed);
        engine.set_player_count(player_count);
        engine.start_game();
        for _ in 0..advances.min(player_count - 1) {
            engine.next_player();
        }

        let before = engine.snapshot();
        engine.reveal_current_player();
        let after = engine.snapshot();

        let current = before.current_reveal_index;
        for (i, (b, a)) in before.players.iter().zip(after.players.iter()).enumerate() {
            if i == current {
                prop_assert!(a.revealed);
            } else {
                prop_assert_eq!(b, a);
            }
        }
        prop_assert_eq!(before.phase, after.phase);
        prop_assert_eq!(before.current_reveal_index, after.current_reveal_index);
    }

    /// Any command sequence keeps the invariants, never panics, and reset
    /// always returns to the initial state.
    #[test]
    fn prop_command_sequences(
        commands in prop::collection::vec(command(), 0..60),
        seed in any::<u64>()
    ) {
        let category = Category::new(CategoryId::new(1), "Pool", "*", ["a", "b", "c"]).unwrap();
        let mut engine = GameEngine::builder().category(category).seed(seed).build().unwrap();

        let mut phase = engine.state().phase;
        for command in &commands {
            engine.apply(command);
            let state = engine.state();

            // Phases only move forward, or back to setup on reset.
            let allowed = match (phase, state.phase) {
                (a, b) if a == b => true,
                (GamePhase::Setup, GamePhase::Reveal) => *command == Command::StartGame,
                (GamePhase::Reveal, GamePhase::Playing) => *command == Command::NextPlayer,
                (_, GamePhase::Setup) => *command == Command::ResetGame,
                _ => false,
            };
            prop_assert!(allowed, "{:?} moved {:?} -> {:?}", command, phase, state.phase);
            phase = state.phase;

            check_round(state)?;
        }

        engine.reset_game();
        prop_assert_eq!(engine.state(), &GameState::default());
    }

    /// The setup controls never leave the configured bounds.
    #[test]
    fn prop_controls_stay_in_bounds(steps in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut engine = GameEngine::builder().seed(0).build().unwrap();
        for up in steps {
            if up {
                engine.increment_player_count();
            } else {
                engine.decrement_player_count();
            }
            let count = engine.state().player_count;
            prop_assert!((2..=10).contains(&count));
        }
    }
}
