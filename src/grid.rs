//! Facelet grid representation and its 54-character string form.
//!
//! The state is six 3x3 grids, one per face, stored in cube-string order
//! (U, R, F, D, L, B). Each cell holds the label of the sticker currently
//! occupying it, so the solved state is every face filled with its own label.
//!
//! Only parsing validates anything: a state assembled with `set` may break the
//! nine-of-each invariant, and keeping it valid is the caller's job.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeError;
use crate::face::{Face, Facelet};

/// Number of stickers on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Cube string of the solved cube.
pub const IDENTITY: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// One face's stickers, indexed `[row][col]`.
pub type FaceGrid = [[Face; 3]; 3];

/// Converts a facelet reference to its position in the cube string.
///
/// Index order is face-major, then row-major: `idx = face * 9 + row * 3 + col`.
#[inline(always)]
pub const fn facelet_to_idx(facelet: Facelet) -> usize {
    facelet.face.index() * 9 + facelet.row * 3 + facelet.col
}

/// Converts a cube-string position to a facelet reference.
#[inline(always)]
pub const fn idx_to_facelet(idx: usize) -> Facelet {
    Facelet::new(Face::ALL[idx / 9], (idx % 9) / 3, idx % 3)
}

/// The sticker layout of the whole cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState {
    faces: [FaceGrid; 6],
}

impl FaceletState {
    /// The solved cube.
    pub fn solved() -> Self {
        let mut faces = [[[Face::U; 3]; 3]; 6];
        for face in Face::ALL {
            faces[face.index()] = [[face; 3]; 3];
        }
        Self { faces }
    }

    #[inline]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Face {
        self.faces[face.index()][row][col]
    }

    #[inline]
    pub fn set(&mut self, face: Face, row: usize, col: usize, value: Face) {
        self.faces[face.index()][row][col] = value;
    }

    #[inline]
    pub fn facelet(&self, facelet: Facelet) -> Face {
        self.get(facelet.face, facelet.row, facelet.col)
    }

    #[inline]
    pub fn set_facelet(&mut self, facelet: Facelet, value: Face) {
        self.set(facelet.face, facelet.row, facelet.col, value);
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    /// Label of the center sticker of `face`. Centers only move with whole-cube
    /// rotations and slice turns.
    #[inline]
    pub fn center(&self, face: Face) -> Face {
        self.get(face, 1, 1)
    }

    /// Finds the face whose center currently shows `colour`.
    pub fn face_with_center(&self, colour: Face) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| self.center(face) == colour)
    }

    /// How many stickers of each label are present, in cube-string order.
    pub fn colour_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for grid in &self.faces {
            for &cell in grid.iter().flatten() {
                counts[cell.index()] += 1;
            }
        }
        counts
    }

    /// Whether every label appears exactly nine times.
    pub fn is_well_formed(&self) -> bool {
        self.colour_counts().iter().all(|&count| count == 9)
    }

    /// Whether every face is a single colour.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all(|&cell| cell == grid[1][1]))
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for FaceletState {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let char_count = s.chars().count();
        if char_count != FACELET_COUNT {
            return Err(CubeError::InvalidLength(char_count));
        }

        let mut state = Self::solved();
        for (index, c) in s.chars().enumerate() {
            let value = Face::from_char(c).ok_or(CubeError::InvalidFacelet { index, found: c })?;
            state.set_facelet(idx_to_facelet(index), value);
        }

        Ok(state)
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for grid in &self.faces {
            for &cell in grid.iter().flatten() {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Formats a state as an unfolded net.
///
/// U sits above the L F R B band and D below it, with F directly between
/// them. Faces in the band are separated by one space.
pub fn format_net(state: &FaceletState) -> String {
    let mut output = String::new();

    let push_row = |output: &mut String, face: Face, row: usize| {
        for &cell in &state.face(face)[row] {
            output.push(cell.as_char());
        }
    };

    for row in 0..3 {
        output.push_str("    ");
        push_row(&mut output, Face::U, row);
        output.push('\n');
    }

    for row in 0..3 {
        for (i, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            push_row(&mut output, face, row);
        }
        output.push('\n');
    }

    for row in 0..3 {
        output.push_str("    ");
        push_row(&mut output, Face::D, row);
        output.push('\n');
    }

    output
}
