//! Statistical checks on round dealing.
//!
//! Seeded engines make these deterministic; the tolerances are still wide
//! enough that any seed should pass.

use impostor_engine::catalog::{Category, CategoryId};
use impostor_engine::engine::GameEngine;

const TRIALS: usize = 20_000;

fn engine(identities: &[&str], seed: u64) -> GameEngine {
    let category = Category::new(CategoryId::new(1), "Pool", "*", identities.iter().copied()).unwrap();
    let mut engine = GameEngine::builder().category(category).seed(seed).build().unwrap();
    engine.select_category(CategoryId::new(1));
    engine
}

/// Assert every bucket is within `tolerance` of the uniform expectation.
fn assert_uniform(counts: &[usize], tolerance: f64) {
    let expected = TRIALS as f64 / counts.len() as f64;
    for (i, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(
            deviation < tolerance,
            "bucket {i}: {count} vs expected {expected:.0} ({:.1}% off)",
            deviation * 100.0
        );
    }
}

#[test]
fn test_impostor_seat_uniform() {
    for player_count in [2, 4, 7, 10] {
        let mut engine = engine(&["A"], 1234 + player_count as u64);
        engine.set_player_count(player_count);

        let mut counts = vec![0usize; player_count];
        for _ in 0..TRIALS {
            engine.start_game();
            counts[engine.state().impostor().unwrap().id.index()] += 1;
        }

        assert_uniform(&counts, 0.1);
    }
}

#[test]
fn test_identity_selection_uniform() {
    let identities = ["Cat", "Dog", "Owl", "Fox", "Bear"];
    let mut engine = engine(&identities, 5678);

    let mut counts = vec![0usize; identities.len()];
    for _ in 0..TRIALS {
        engine.start_game();
        let drawn = engine.state().selected_identity.as_str();
        let i = identities.iter().position(|&id| id == drawn).unwrap();
        counts[i] += 1;
    }

    assert_uniform(&counts, 0.1);
}

#[test]
fn test_seat_and_identity_independent_of_previous_round() {
    let mut engine = engine(&["Cat", "Dog"], 42);
    engine.set_player_count(2);

    // Count how often the next round repeats the previous seat.
    let mut repeats = 0usize;
    engine.start_game();
    let mut previous = engine.state().impostor().unwrap().id;
    for _ in 0..TRIALS {
        engine.start_game();
        let seat = engine.state().impostor().unwrap().id;
        if seat == previous {
            repeats += 1;
        }
        previous = seat;
    }

    let ratio = repeats as f64 / TRIALS as f64;
    assert!((ratio - 0.5).abs() < 0.05, "repeat ratio {ratio}");
}
