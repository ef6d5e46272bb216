//! Random scramble generation.
//!
//! Scrambles are drawn by rejection sampling from the scramble alphabet:
//! tokens in the avoid set are never drawn and no two neighbouring tokens
//! share a base letter.

use fastrand::Rng;

use crate::error::CubeError;
use crate::moves::{scramble_moves, Move};

/// Scramble generator owning its random source.
pub struct Scrambler {
    rng: Rng,
}

impl Scrambler {
    /// A generator seeded from system entropy.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// A generator that always produces the same scrambles for a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Draws `length` moves, never using a token from `avoid`.
    ///
    /// Fails when the avoid set leaves no candidates, or leaves only one
    /// base letter for a scramble longer than one move.
    pub fn generate(&mut self, length: usize, avoid: &[Move]) -> Result<Vec<Move>, CubeError> {
        let pool: Vec<Move> = scramble_moves()
            .into_iter()
            .filter(|mv| !avoid.contains(mv))
            .collect();

        if length == 0 {
            return Ok(Vec::new());
        }
        let first_base = pool.first().ok_or(CubeError::EmptyMovePool)?.base;
        if length > 1 && pool.iter().all(|mv| mv.base == first_base) {
            return Err(CubeError::EmptyMovePool);
        }

        let mut scramble: Vec<Move> = Vec::with_capacity(length);
        while scramble.len() < length {
            let candidate = pool[self.rng.usize(..pool.len())];
            // reject a repeat of the previous base letter
            if scramble.last().is_some_and(|last| last.base == candidate.base) {
                continue;
            }
            scramble.push(candidate);
        }

        Ok(scramble)
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

/// The sequence that undoes `moves`: reversed, with each move inverted.
pub fn inverse(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
