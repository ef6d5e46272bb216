//! Move notation and move application.
//!
//! Every move is built from two primitives on `FaceletState`:
//! - `rotate_face` turns the eight border stickers of one face a quarter turn
//! - `rotate_slice` cycles the four three-sticker runs of one slice
//!
//! Face turns combine both, wide turns add the neighbouring middle slice,
//! M/E/S turn only a middle slice and x/y/z turn the whole cube.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::CubeError;
use crate::face::Face;
use crate::geometry::Axis;
use crate::grid::FaceletState;

/// Border cells of a face in clockwise order, starting top-left.
const BORDER_CYCLE: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

/// The letter of a move, without its modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveBase {
    U,
    R,
    F,
    D,
    L,
    B,
    WideU,
    WideR,
    WideF,
    WideD,
    WideL,
    WideB,
    M,
    E,
    S,
    X,
    Y,
    Z,
}

impl MoveBase {
    pub const ALL: [MoveBase; 18] = [
        MoveBase::U,
        MoveBase::R,
        MoveBase::F,
        MoveBase::D,
        MoveBase::L,
        MoveBase::B,
        MoveBase::WideU,
        MoveBase::WideR,
        MoveBase::WideF,
        MoveBase::WideD,
        MoveBase::WideL,
        MoveBase::WideB,
        MoveBase::M,
        MoveBase::E,
        MoveBase::S,
        MoveBase::X,
        MoveBase::Y,
        MoveBase::Z,
    ];

    pub const fn as_char(self) -> char {
        match self {
            MoveBase::U => 'U',
            MoveBase::R => 'R',
            MoveBase::F => 'F',
            MoveBase::D => 'D',
            MoveBase::L => 'L',
            MoveBase::B => 'B',
            MoveBase::WideU => 'u',
            MoveBase::WideR => 'r',
            MoveBase::WideF => 'f',
            MoveBase::WideD => 'd',
            MoveBase::WideL => 'l',
            MoveBase::WideB => 'b',
            MoveBase::M => 'M',
            MoveBase::E => 'E',
            MoveBase::S => 'S',
            MoveBase::X => 'x',
            MoveBase::Y => 'y',
            MoveBase::Z => 'z',
        }
    }

    pub fn from_char(c: char) -> Option<MoveBase> {
        MoveBase::ALL.into_iter().find(|base| base.as_char() == c)
    }

    /// The outer face turned by a face or wide move.
    pub const fn face(self) -> Option<Face> {
        match self {
            MoveBase::U | MoveBase::WideU => Some(Face::U),
            MoveBase::R | MoveBase::WideR => Some(Face::R),
            MoveBase::F | MoveBase::WideF => Some(Face::F),
            MoveBase::D | MoveBase::WideD => Some(Face::D),
            MoveBase::L | MoveBase::WideL => Some(Face::L),
            MoveBase::B | MoveBase::WideB => Some(Face::B),
            _ => None,
        }
    }

    /// Face turn for a face label.
    pub const fn from_face(face: Face) -> MoveBase {
        match face {
            Face::U => MoveBase::U,
            Face::R => MoveBase::R,
            Face::F => MoveBase::F,
            Face::D => MoveBase::D,
            Face::L => MoveBase::L,
            Face::B => MoveBase::B,
        }
    }

    const fn is_slice(self) -> bool {
        matches!(self, MoveBase::M | MoveBase::E | MoveBase::S)
    }

    const fn is_rotation(self) -> bool {
        matches!(self, MoveBase::X | MoveBase::Y | MoveBase::Z)
    }
}

/// Turn amount suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    /// No suffix: a clockwise quarter turn.
    Plain,
    /// `'`: a counter-clockwise quarter turn.
    Prime,
    /// `2`: a half turn.
    Double,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Plain, Modifier::Prime, Modifier::Double];

    const fn suffix(self) -> &'static str {
        match self {
            Modifier::Plain => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }
}

/// One token of cube notation, e.g. `R`, `u'` or `x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub base: MoveBase,
    pub modifier: Modifier,
}

impl Move {
    pub const fn new(base: MoveBase, modifier: Modifier) -> Self {
        Self { base, modifier }
    }

    /// Clockwise quarter turn of `face`.
    pub const fn face(face: Face) -> Self {
        Self::new(MoveBase::from_face(face), Modifier::Plain)
    }

    pub const fn with_modifier(self, modifier: Modifier) -> Self {
        Self::new(self.base, modifier)
    }

    /// The move that undoes this one. Half turns are their own inverse.
    pub const fn inverse(self) -> Self {
        let modifier = match self.modifier {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        };
        Self::new(self.base, modifier)
    }

    /// Whether this move belongs to the scramble alphabet.
    pub const fn is_scramble_move(&self) -> bool {
        !self.base.is_slice()
            && !(self.base.is_rotation() && matches!(self.modifier, Modifier::Double))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.as_char(), self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(token.to_string());

        let mut chars = token.chars();
        let base = chars.next().and_then(MoveBase::from_char).ok_or_else(invalid)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Plain,
            "'" => Modifier::Prime,
            "2" => Modifier::Double,
            _ => return Err(invalid()),
        };

        Ok(Self::new(base, modifier))
    }
}

/// All 54 legal tokens: every base plain, then every base primed and doubled.
pub fn all_moves() -> Vec<Move> {
    let plain = MoveBase::ALL.map(|base| Move::new(base, Modifier::Plain));
    let modified = MoveBase::ALL.into_iter().flat_map(|base| {
        [
            Move::new(base, Modifier::Prime),
            Move::new(base, Modifier::Double),
        ]
    });
    plain.into_iter().chain(modified).collect()
}

/// The 42 tokens scrambles draw from: no middle slices, no half-turn rotations.
pub fn scramble_moves() -> Vec<Move> {
    all_moves()
        .into_iter()
        .filter(Move::is_scramble_move)
        .collect()
}

/// Parses whitespace-separated notation. Fails on the first bad token.
pub fn parse_moves(notation: &str) -> Result<Vec<Move>, CubeError> {
    notation.split_whitespace().map(str::parse).collect()
}

/// Formats moves as space-separated notation.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl FaceletState {
    /// Turns the border of `face` a quarter turn; the center stays put.
    pub fn rotate_face(&mut self, face: Face, clockwise: bool) {
        let shift = if clockwise { 2 } else { 6 };
        let original = *self.face(face);
        let grid = self.face_mut(face);

        for (i, &(row, col)) in BORDER_CYCLE.iter().enumerate() {
            let (dest_row, dest_col) = BORDER_CYCLE[(i + shift) % BORDER_CYCLE.len()];
            grid[dest_row][dest_col] = original[row][col];
        }
    }

    /// Moves every run of slice `index` on `axis` one segment along
    /// (clockwise) or back (counter-clockwise).
    pub fn rotate_slice(&mut self, axis: Axis, index: usize, clockwise: bool) {
        let runs = axis.segments(index).map(|segment| segment.cells());
        let values = runs.map(|run| run.map(|facelet| self.facelet(facelet)));

        for (source, run_values) in values.iter().enumerate() {
            let dest = if clockwise {
                (source + 1) % 4
            } else {
                (source + 3) % 4
            };
            for (&facelet, &value) in runs[dest].iter().zip(run_values) {
                self.set_facelet(facelet, value);
            }
        }
    }

    /// Applies one move.
    pub fn apply(&mut self, mv: Move) {
        trace!("apply {mv}");
        let (clockwise, turns) = match mv.modifier {
            Modifier::Plain => (true, 1),
            Modifier::Prime => (false, 1),
            Modifier::Double => (true, 2),
        };
        for _ in 0..turns {
            self.quarter_turn(mv.base, clockwise);
        }
    }

    /// Parses and applies one token; an unknown token leaves the state untouched.
    pub fn apply_token(&mut self, token: &str) -> Result<(), CubeError> {
        let mv: Move = token.parse()?;
        self.apply(mv);
        Ok(())
    }

    /// Applies a list of moves in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    fn quarter_turn(&mut self, base: MoveBase, cw: bool) {
        match base {
            MoveBase::F | MoveBase::WideF => {
                self.rotate_face(Face::F, cw);
                self.rotate_slice(Axis::F, 0, cw);
                if base == MoveBase::WideF {
                    self.rotate_slice(Axis::F, 1, cw);
                }
            }
            MoveBase::B | MoveBase::WideB => {
                self.rotate_face(Face::B, cw);
                self.rotate_slice(Axis::F, 2, !cw);
                if base == MoveBase::WideB {
                    self.rotate_slice(Axis::F, 1, !cw);
                }
            }
            MoveBase::R | MoveBase::WideR => {
                self.rotate_face(Face::R, cw);
                self.rotate_slice(Axis::R, 0, cw);
                if base == MoveBase::WideR {
                    self.rotate_slice(Axis::R, 1, cw);
                }
            }
            MoveBase::L | MoveBase::WideL => {
                self.rotate_face(Face::L, cw);
                self.rotate_slice(Axis::R, 2, !cw);
                if base == MoveBase::WideL {
                    self.rotate_slice(Axis::R, 1, !cw);
                }
            }
            MoveBase::U | MoveBase::WideU => {
                self.rotate_face(Face::U, cw);
                self.rotate_slice(Axis::U, 0, cw);
                if base == MoveBase::WideU {
                    self.rotate_slice(Axis::U, 1, cw);
                }
            }
            MoveBase::D | MoveBase::WideD => {
                self.rotate_face(Face::D, cw);
                self.rotate_slice(Axis::U, 2, !cw);
                if base == MoveBase::WideD {
                    self.rotate_slice(Axis::U, 1, !cw);
                }
            }
            // M follows L, E follows D, S follows F
            MoveBase::M => self.rotate_slice(Axis::R, 1, !cw),
            MoveBase::E => self.rotate_slice(Axis::U, 1, !cw),
            MoveBase::S => self.rotate_slice(Axis::F, 1, cw),
            MoveBase::X => self.rotate_whole(Face::R, Axis::R, cw),
            MoveBase::Y => self.rotate_whole(Face::U, Axis::U, cw),
            MoveBase::Z => self.rotate_whole(Face::F, Axis::F, cw),
        }
    }

    fn rotate_whole(&mut self, face: Face, axis: Axis, cw: bool) {
        self.rotate_face(face, cw);
        for index in 0..3 {
            self.rotate_slice(axis, index, cw);
        }
        self.rotate_face(face.opposite(), !cw);
    }
}
