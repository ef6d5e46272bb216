//! # Property-Based Tests
//!
//! Invariants of the move engine, scrambler and solver checked with proptest.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

use rubiks::connectivity::connected_facelets;
use rubiks::grid::{idx_to_facelet, FACELET_COUNT, IDENTITY};
use rubiks::moves::{all_moves, format_moves, parse_moves, scramble_moves, Modifier};
use rubiks::scramble::{inverse, Scrambler};
use rubiks::{FaceletState, Move, Solver};

fn any_move() -> impl Strategy<Value = Move> {
    select(all_moves())
}

fn scrambled(moves: &[Move]) -> FaceletState {
    let mut state = FaceletState::solved();
    state.apply_all(moves);
    state
}

// =============================================================================
// CUBE STRINGS
// =============================================================================

proptest! {
    /// Any 54-letter string over the face alphabet parses and prints back unchanged.
    #[test]
    fn cube_string_round_trip(text in "[URFDLB]{54}") {
        let state: FaceletState = text.parse().expect("parse");
        prop_assert_eq!(state.to_string(), text);
    }

    /// Strings of the wrong length are rejected.
    #[test]
    fn wrong_length_rejected(text in "[URFDLB]{0,53}") {
        prop_assert!(text.parse::<FaceletState>().is_err());
    }

    /// Notation printed by format_moves parses back to the same moves.
    #[test]
    fn notation_round_trip(moves in vec(any_move(), 0..30)) {
        let text = format_moves(&moves);
        prop_assert_eq!(parse_moves(&text).expect("parse"), moves);
    }
}

// =============================================================================
// MOVE ENGINE
// =============================================================================

proptest! {
    /// Applying a move and then its inverse leaves any state unchanged.
    #[test]
    fn move_then_inverse_is_identity(
        setup in vec(any_move(), 0..20),
        mv in any_move()
    ) {
        let before = scrambled(&setup);
        let mut state = before.clone();
        state.apply(mv);
        state.apply(mv.inverse());
        prop_assert_eq!(state, before);
    }

    /// Four quarter turns and two half turns are both the identity.
    #[test]
    fn move_orders(mv in any_move()) {
        let quarter = mv.with_modifier(Modifier::Plain);
        let mut state = FaceletState::solved();
        for _ in 0..4 {
            state.apply(quarter);
        }
        prop_assert!(state.is_solved());

        let half = mv.with_modifier(Modifier::Double);
        state.apply(half);
        state.apply(half);
        prop_assert_eq!(state.to_string(), IDENTITY);
    }

    /// A sequence followed by its inverse sequence returns to solved.
    #[test]
    fn sequence_then_inverse_is_identity(moves in vec(any_move(), 0..60)) {
        let mut state = scrambled(&moves);
        prop_assert!(state.is_well_formed());
        state.apply_all(&inverse(&moves));
        prop_assert!(state.is_solved());
    }

    /// Moves permute facelets, so every colour keeps nine stickers.
    #[test]
    fn moves_preserve_colour_counts(moves in vec(any_move(), 1..60)) {
        let state = scrambled(&moves);
        prop_assert!(state.colour_counts().iter().all(|&count| count == 9));
    }
}

// =============================================================================
// SCRAMBLER
// =============================================================================

proptest! {
    /// Seeded scrambles have the requested length, stay in the scramble
    /// alphabet and never repeat a base letter back to back.
    #[test]
    fn scramble_shape(seed in any::<u64>(), length in 0usize..80) {
        let scramble = Scrambler::with_seed(seed).generate(length, &[]).expect("scramble");
        let alphabet = scramble_moves();

        prop_assert_eq!(scramble.len(), length);
        prop_assert!(scramble.iter().all(|mv| alphabet.contains(mv)));
        prop_assert!(scramble.windows(2).all(|pair| pair[0].base != pair[1].base));
    }

    /// Tokens in the avoid set never appear.
    #[test]
    fn scramble_avoids_tokens(
        seed in any::<u64>(),
        avoid in vec(select(scramble_moves()), 0..20)
    ) {
        let scramble = Scrambler::with_seed(seed).generate(40, &avoid).expect("scramble");
        prop_assert!(scramble.iter().all(|mv| !avoid.contains(mv)));
    }

    /// The same seed produces the same scramble.
    #[test]
    fn scramble_is_reproducible(seed in any::<u64>()) {
        let first = Scrambler::with_seed(seed).generate(30, &[]).expect("scramble");
        let second = Scrambler::with_seed(seed).generate(30, &[]).expect("scramble");
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// CONNECTIVITY AND SOLVER
// =============================================================================

proptest! {
    /// Facelets that share a cubelet always list each other.
    #[test]
    fn connectivity_is_symmetric(index in 0..FACELET_COUNT) {
        let facelet = idx_to_facelet(index);
        for neighbour in connected_facelets(facelet) {
            prop_assert!(connected_facelets(neighbour).contains(&facelet));
        }
    }

    /// The solver finishes any scramble with a solved cross, and replaying its
    /// moves on the scramble reaches the reported state.
    #[test]
    fn solver_solves_cross(seed in any::<u64>()) {
        let scramble = Scrambler::with_seed(seed).generate(50, &[]).expect("scramble");
        let start = scrambled(&scramble);

        let solution = Solver::new(&start).solve().expect("solve");
        prop_assert!(rubiks::solver::cross_solved(&solution.state));

        let mut replay = start.clone();
        replay.apply_all(&solution.moves().collect::<Vec<_>>());
        prop_assert_eq!(replay, solution.state);
    }
}

#[test]
fn sexy_move_and_inverse_scenario() {
    let moves = parse_moves("U R U' R'").expect("parse");
    let mut state = scrambled(&moves);
    assert!(!state.is_solved());
    assert_eq!(format_moves(&inverse(&moves)), "R U R' U'");
    state.apply_all(&inverse(&moves));
    assert_eq!(state.to_string(), IDENTITY);
}
