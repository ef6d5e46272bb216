//! Beginner's-method cross solver.
//!
//! The solver works on its own copy of the caller's state. It first turns the
//! cube so the white center is on top and lines up any white top edges that
//! already sit in the right order, then repeats a fixed round of edge fixes
//! until the cross is solved:
//! - white edges facing down are aligned under their side and raised
//! - top edges above the wrong side are dropped, realigned and raised
//! - white stickers on the side of the bottom layer are aligned and raised
//! - flipped top edges above the wrong side are dropped and handled as above
//! - flipped top edges above the right side are flipped in place
//! - white stickers in the middle layer are inserted from the front
//!
//! Each handled piece is recorded as a named `Phase`. The whole run is bounded
//! by a step budget and by detection of a repeated state between rounds.

use std::fmt;

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::connectivity::{edge_partner, edge_ring, slice_ring};
use crate::cube::Cube;
use crate::error::CubeError;
use crate::face::{Face, Facelet};
use crate::geometry::Axis;
use crate::grid::FaceletState;
use crate::moves::{format_moves, Modifier, Move, MoveBase};

/// Colour the cross is built on.
const CROSS_COLOUR: Face = Face::U;

/// Side colours in the order a D turn carries a bottom piece past them.
const SIDE_SEQUENCE: [Face; 4] = [Face::F, Face::R, Face::B, Face::L];

/// Top edge positions clockwise seen from above, starting at the back.
const TOP_RING: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 1), (1, 0)];

/// Default number of solver loop iterations before giving up.
pub const DEFAULT_STEP_LIMIT: usize = 256;

const U_PRIME: Move = Move::new(MoveBase::U, Modifier::Prime);
const D_TURN: Move = Move::new(MoveBase::D, Modifier::Plain);

/// Flips the top-front edge in place; the edge ends above the front center.
const FLIP_TRIGGER: [Move; 4] = [
    Move::new(MoveBase::F, Modifier::Plain),
    Move::new(MoveBase::U, Modifier::Prime),
    Move::new(MoveBase::R, Modifier::Plain),
    Move::new(MoveBase::U, Modifier::Plain),
];

const fn y_turn(modifier: Modifier) -> Move {
    Move::new(MoveBase::Y, modifier)
}

/// A named group of moves that fixes one piece (or orients the cube).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub moves: Vec<Move>,
}

/// The phase log of a solve together with the state it ends in.
#[derive(Debug, Clone)]
pub struct Solution {
    pub phases: Vec<Phase>,
    pub state: FaceletState,
}

impl Solution {
    /// All moves in order, across phases.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.phases.iter().flat_map(|phase| phase.moves.iter().copied())
    }

    pub fn move_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.moves.len()).sum()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in &self.phases {
            if phase.moves.is_empty() {
                writeln!(f, "{}: (no moves)", phase.name)?;
            } else {
                writeln!(f, "{}: {}", phase.name, format_moves(&phase.moves))?;
            }
        }
        Ok(())
    }
}

/// Works out the turn of `rotation`'s layer that carries a piece sitting at
/// the side whose center is `current` over to the side whose center is
/// `colour`, using `sequence` as the cyclic order of sides.
///
/// Returns `None` when no turn is needed or either colour is not in the
/// sequence.
pub fn edge_alignment(
    colour: Face,
    current: Face,
    sequence: &[Face; 4],
    rotation: Move,
) -> Option<Move> {
    let location = sequence.iter().position(|&face| face == current)?;
    let ahead = |steps: usize| sequence[(location + steps) % sequence.len()];

    if ahead(2) == colour {
        Some(rotation.with_modifier(Modifier::Double))
    } else if ahead(1) == colour {
        Some(rotation)
    } else if ahead(3) == colour {
        Some(rotation.inverse())
    } else {
        None
    }
}

/// Whether the white cross is solved: white center on top, four white top
/// edges, and each edge's side sticker matching its side center.
pub fn cross_solved(state: &FaceletState) -> bool {
    state.center(Face::U) == CROSS_COLOUR
        && TOP_RING
            .iter()
            .all(|&(row, col)| state.get(Face::U, row, col) == CROSS_COLOUR)
        && edge_ring(Axis::U, 0)
            .iter()
            .all(|&side| state.facelet(side) == state.center(side.face))
}

fn edge_name(colour: Face) -> String {
    format!("{}+{}", CROSS_COLOUR.colour_name(), colour.colour_name())
}

/// Cross solver over a private copy of a cube state.
pub struct Solver {
    cube: Cube,
    phases: Vec<Phase>,
    steps: usize,
    step_limit: usize,
}

impl Solver {
    /// Copies `state`; the caller's value is never touched.
    pub fn new(state: &FaceletState) -> Self {
        Self {
            cube: Cube::from_state(state.clone()),
            phases: Vec::new(),
            steps: 0,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Runs the solver to completion.
    pub fn solve(mut self) -> Result<Solution, CubeError> {
        self.orient_center()?;
        self.align_solved_top_edges()?;

        let mut seen: FxHashSet<FaceletState> = FxHashSet::default();
        loop {
            self.step()?;
            if !seen.insert(self.cube.state().clone()) {
                warn!("solver revisited a state after {} steps", self.steps);
                return Err(self.unsolvable());
            }

            self.solve_bottom_edges()?;
            self.realign_top_edges()?;
            self.raise_flipped_bottom_edges()?;
            self.drop_misaligned_flipped_edges()?;
            self.flip_top_edges()?;
            self.insert_middle_edges()?;

            if cross_solved(self.cube.state()) {
                break;
            }
        }

        let solution = Solution {
            phases: self.phases,
            state: self.cube.into_state(),
        };
        info!(
            "cross solved in {} moves over {} phases",
            solution.move_count(),
            solution.phases.len()
        );
        Ok(solution)
    }

    fn step(&mut self) -> Result<(), CubeError> {
        self.steps += 1;
        if self.steps > self.step_limit {
            warn!("solver gave up after {} steps", self.step_limit);
            return Err(self.unsolvable());
        }
        Ok(())
    }

    fn unsolvable(&self) -> CubeError {
        CubeError::Unsolvable { steps: self.steps }
    }

    fn push_phase(&mut self, name: String) {
        let moves = self.cube.take_history();
        debug!("{name}: {}", format_moves(&moves));
        self.phases.push(Phase { name, moves });
    }

    fn colour(&self, facelet: Facelet) -> Face {
        self.cube.state().facelet(facelet)
    }

    fn center(&self, face: Face) -> Face {
        self.cube.state().center(face)
    }

    fn face_with_center(&self, colour: Face) -> Result<Face, CubeError> {
        self.cube
            .state()
            .face_with_center(colour)
            .ok_or_else(|| self.unsolvable())
    }

    fn partner(&self, facelet: Facelet) -> Result<Facelet, CubeError> {
        edge_partner(facelet).ok_or_else(|| self.unsolvable())
    }

    /// Edge stickers of `face` showing `colour`.
    fn edges_on_face(&self, face: Face, colour: Face) -> Vec<Facelet> {
        [(0, 1), (1, 0), (1, 2), (2, 1)]
            .into_iter()
            .map(|(row, col)| Facelet::new(face, row, col))
            .filter(|&facelet| self.colour(facelet) == colour)
            .collect()
    }

    fn turn(&mut self, mv: Move) {
        self.cube.apply(mv);
    }

    fn half_turn(&mut self, face: Face) {
        self.turn(Move::face(face).with_modifier(Modifier::Double));
    }

    fn align_edge(&mut self, colour: Face, current: Face, rotation: Move) -> Option<Move> {
        let mv = edge_alignment(colour, current, &SIDE_SEQUENCE, rotation)?;
        self.turn(mv);
        Some(mv)
    }

    fn orient_center(&mut self) -> Result<(), CubeError> {
        let rotation = match self.face_with_center(CROSS_COLOUR)? {
            Face::U => None,
            Face::R => Some(Move::new(MoveBase::Z, Modifier::Prime)),
            Face::L => Some(Move::new(MoveBase::Z, Modifier::Plain)),
            Face::F => Some(Move::new(MoveBase::X, Modifier::Plain)),
            Face::B => Some(Move::new(MoveBase::X, Modifier::Prime)),
            Face::D => Some(Move::new(MoveBase::X, Modifier::Double)),
        };
        if let Some(rotation) = rotation {
            self.turn(rotation);
        }
        self.push_phase(format!(
            "Orient {} center on top",
            CROSS_COLOUR.colour_name()
        ));
        Ok(())
    }

    /// Finds the longest cyclic run of white top edges already in the right
    /// order relative to each other and turns U so the run sits over its
    /// centers.
    fn align_solved_top_edges(&mut self) -> Result<(), CubeError> {
        let mut top_edges: [Option<Face>; 4] = [None; 4];
        for (slot, &(row, col)) in TOP_RING.iter().enumerate() {
            let facelet = Facelet::new(Face::U, row, col);
            if self.colour(facelet) == CROSS_COLOUR {
                top_edges[slot] = Some(self.colour(self.partner(facelet)?));
            }
        }

        // walking the top ring clockwise meets the sides in reverse order
        let mut expected_order = SIDE_SEQUENCE;
        expected_order.reverse();

        let mut runs: Vec<Vec<Face>> = Vec::new();
        for (start, &edge) in top_edges.iter().enumerate() {
            let Some(edge) = edge else { continue };
            if runs.iter().any(|run| run.contains(&edge)) {
                continue;
            }
            let Some(offset) = expected_order.iter().position(|&face| face == edge) else {
                continue;
            };
            let run = (0..4)
                .filter_map(|step| {
                    let expected = expected_order[(offset + step) % 4];
                    (top_edges[(start + step) % 4] == Some(expected)).then_some(expected)
                })
                .collect();
            runs.push(run);
        }

        let mut longest: &[Face] = &[];
        for run in &runs {
            if run.len() > longest.len() {
                longest = run.as_slice();
            }
        }
        let Some(&anchor) = longest.first() else {
            return Ok(());
        };

        for facelet in self.edges_on_face(Face::U, CROSS_COLOUR) {
            let side = self.partner(facelet)?;
            if self.colour(side) == anchor {
                let current = self.center(side.face);
                self.align_edge(anchor, current, U_PRIME);
                break;
            }
        }

        let names: Vec<&str> = longest.iter().map(|face| face.colour_name()).collect();
        self.push_phase(format!(
            "Align solved {} edge pieces ({})",
            CROSS_COLOUR.colour_name(),
            names.join(", ")
        ));
        Ok(())
    }

    /// White stickers facing down: turn D until the edge is under its side,
    /// then raise it with a half turn.
    fn solve_bottom_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let Some(bottom) = self.edges_on_face(Face::D, CROSS_COLOUR).into_iter().next() else {
                break;
            };
            let side = self.partner(bottom)?;
            let colour = self.colour(side);
            let current = self.center(side.face);

            self.align_edge(colour, current, D_TURN);
            let target = self.face_with_center(colour)?;
            self.half_turn(target);
            self.push_phase(format!("Solve {} edge piece", edge_name(colour)));
        }
        Ok(())
    }

    /// White top edges over the wrong side: drop, realign under D, raise.
    fn realign_top_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let mut misplaced = None;
            for facelet in self.edges_on_face(Face::U, CROSS_COLOUR) {
                let side = self.partner(facelet)?;
                if self.colour(side) != self.center(side.face) {
                    misplaced = Some(side);
                    break;
                }
            }
            let Some(side) = misplaced else { break };

            let current = self.center(side.face);
            let colour = self.colour(side);
            self.half_turn(side.face);
            self.align_edge(colour, current, D_TURN);
            let target = self.face_with_center(colour)?;
            self.half_turn(target);
            self.push_phase(format!("Realign {} edge piece", edge_name(colour)));
        }
        Ok(())
    }

    fn raise_flipped_bottom_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let flipped = edge_ring(Axis::U, 2)
                .into_iter()
                .find(|&facelet| self.colour(facelet) == CROSS_COLOUR);
            let Some(flipped) = flipped else { break };
            self.align_flipped_bottom_edge(flipped)?;
        }
        Ok(())
    }

    /// `flipped` is a white sticker on the side of the bottom layer. Turns D
    /// until the edge's other sticker is under its own side and raises it, so
    /// it arrives on top flipped but over the right side.
    fn align_flipped_bottom_edge(&mut self, flipped: Facelet) -> Result<(), CubeError> {
        let bottom = self.partner(flipped)?;
        let colour = self.colour(bottom);
        let current = self.center(flipped.face);

        self.align_edge(colour, current, D_TURN);
        let target = self.face_with_center(colour)?;
        self.half_turn(target);
        self.push_phase(format!("Align flipped {} edge piece", edge_name(colour)));
        Ok(())
    }

    /// Flipped top edges over the wrong side go back down and through
    /// `align_flipped_bottom_edge`.
    fn drop_misaligned_flipped_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let mut dropped = 0;
            for side in edge_ring(Axis::U, 0) {
                if self.colour(side) != CROSS_COLOUR {
                    continue;
                }
                let top = self.partner(side)?;
                if self.colour(top) == self.center(side.face) {
                    continue;
                }

                dropped += 1;
                self.half_turn(side.face);
                for bottom in edge_ring(Axis::U, 2) {
                    if self.colour(bottom) == CROSS_COLOUR {
                        self.align_flipped_bottom_edge(bottom)?;
                    }
                }
            }
            if dropped == 0 {
                break;
            }
        }
        Ok(())
    }

    fn flip_top_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let flipped = edge_ring(Axis::U, 0)
                .into_iter()
                .find(|&facelet| self.colour(facelet) == CROSS_COLOUR);
            let Some(flipped) = flipped else { break };
            let colour = self.colour(self.partner(flipped)?);

            // bring the piece to the front
            let rotation = match flipped.face {
                Face::R => Some(y_turn(Modifier::Plain)),
                Face::L => Some(y_turn(Modifier::Prime)),
                Face::B => Some(y_turn(Modifier::Double)),
                _ => None,
            };
            if let Some(rotation) = rotation {
                self.turn(rotation);
            }
            for mv in FLIP_TRIGGER {
                self.turn(mv);
            }
            self.push_phase(format!("Flip {} edge piece", edge_name(colour)));
        }
        Ok(())
    }

    /// White stickers in the middle layer: turn the cube so the edge is on
    /// the front-right (white on R) or front-left (white on L), line the top
    /// up with U, swing the edge up with F' or F and undo the U.
    fn insert_middle_edges(&mut self) -> Result<(), CubeError> {
        loop {
            self.step()?;
            let edge = slice_ring(Axis::U, 1)
                .into_iter()
                .find(|&facelet| !facelet.is_center() && self.colour(facelet) == CROSS_COLOUR);
            let Some(edge) = edge else { break };
            let colour = self.colour(self.partner(edge)?);

            let (insert, rotation) = if edge.col == 0 {
                let rotation = match edge.face {
                    Face::B => Some(y_turn(Modifier::Plain)),
                    Face::L => Some(y_turn(Modifier::Double)),
                    Face::F => Some(y_turn(Modifier::Prime)),
                    _ => None,
                };
                (Move::new(MoveBase::F, Modifier::Prime), rotation)
            } else {
                let rotation = match edge.face {
                    Face::B => Some(y_turn(Modifier::Prime)),
                    Face::R => Some(y_turn(Modifier::Double)),
                    Face::F => Some(y_turn(Modifier::Plain)),
                    _ => None,
                };
                (Move::new(MoveBase::F, Modifier::Plain), rotation)
            };
            if let Some(rotation) = rotation {
                self.turn(rotation);
            }

            let front = self.center(Face::F);
            let aligned = self.align_edge(front, colour, U_PRIME);
            self.turn(insert);
            if let Some(aligned) = aligned {
                self.turn(aligned.inverse());
            }
            self.push_phase(format!("Insert {} edge piece", edge_name(colour)));
        }
        Ok(())
    }
}
