//! Face labels and facelet references.
//!
//! A face label doubles as a sticker colour: the sticker that starts on the
//! U face carries the label `U` wherever it travels.

use std::fmt;

/// One of the six faces of the cube (up, right, front, down, left, back).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// All faces in cube-string order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face in cube-string order.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Face::U => 0,
            Face::R => 1,
            Face::F => 2,
            Face::D => 3,
            Face::L => 4,
            Face::B => 5,
        }
    }

    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Human-readable colour of the sticker that starts on this face.
    pub const fn colour_name(self) -> &'static str {
        match self {
            Face::U => "white",
            Face::L => "green",
            Face::F => "red",
            Face::R => "blue",
            Face::D => "yellow",
            Face::B => "orange",
        }
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Address of a single sticker: face plus row/column in that face's 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Facelet {
    #[inline]
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }

    /// Whether this is the fixed center sticker of its face.
    #[inline]
    pub const fn is_center(&self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}][{}]", self.face, self.row, self.col)
    }
}
