//! A cube that records the moves applied to it.

use crate::error::CubeError;
use crate::grid::FaceletState;
use crate::moves::{parse_moves, Move};

/// Facelet state plus the ordered history of moves that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cube {
    state: FaceletState,
    history: Vec<Move>,
}

impl Cube {
    /// A solved cube with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing state; the history starts empty.
    pub fn from_state(state: FaceletState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    pub fn into_state(self) -> FaceletState {
        self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the recorded moves and starts a fresh history.
    pub fn take_history(&mut self) -> Vec<Move> {
        std::mem::take(&mut self.history)
    }

    pub fn apply(&mut self, mv: Move) {
        self.state.apply(mv);
        self.history.push(mv);
    }

    pub fn apply_token(&mut self, token: &str) -> Result<(), CubeError> {
        let mv: Move = token.parse()?;
        self.apply(mv);
        Ok(())
    }

    /// Applies space-separated notation. Every token is parsed before the
    /// first move is applied, so a bad token leaves the cube unchanged.
    pub fn apply_sequence(&mut self, notation: &str) -> Result<(), CubeError> {
        let moves = parse_moves(notation)?;
        for mv in moves {
            self.apply(mv);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::format_moves;

    #[test]
    fn test_history_records_moves_in_order() {
        let mut cube = Cube::new();
        cube.apply_sequence("R U R' U'").unwrap();
        assert_eq!(format_moves(cube.history()), "R U R' U'");
        assert!(!cube.state().is_solved());
    }

    #[test]
    fn test_take_history_resets() {
        let mut cube = Cube::new();
        cube.apply_token("F2").unwrap();
        assert_eq!(cube.take_history().len(), 1);
        assert!(cube.history().is_empty());
        cube.apply_token("F2").unwrap();
        assert!(cube.state().is_solved());
    }

    #[test]
    fn test_bad_sequence_is_atomic() {
        let mut cube = Cube::new();
        let result = cube.apply_sequence("R U X");
        assert_eq!(result, Err(CubeError::InvalidMove("X".to_string())));
        assert!(cube.state().is_solved());
        assert!(cube.history().is_empty());
    }
}
