//! Error type shared by the cube engine, scrambler and solver.

use thiserror::Error;

/// Errors produced while parsing, moving, scrambling or solving a cube.
///
/// Every error is terminal for the operation that raised it: a rejected move
/// or cube string leaves the target state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// The cube string does not contain exactly 54 facelets.
    #[error("cube string must contain 54 facelets, found {0}")]
    InvalidLength(usize),

    /// A character outside `URFDLB` appeared in a cube string.
    #[error("invalid facelet {found:?} at index {index}")]
    InvalidFacelet { index: usize, found: char },

    /// A move token outside the 54-token alphabet.
    #[error("unrecognized move token {0:?}")]
    InvalidMove(String),

    /// The avoid-set leaves nothing a scramble can be drawn from.
    #[error("no scramble moves left after applying the avoid set")]
    EmptyMovePool,

    /// The solver ran out of steps or revisited a state without solving the cross.
    #[error("cross not solved after {steps} solver steps")]
    Unsolvable { steps: usize },
}
