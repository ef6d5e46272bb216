//! Slice layouts and sticker geometry.
//!
//! A slice is one of the three layers parallel to an axis face. Its border
//! runs across four side faces; each run is described by a `SliceSegment`
//! naming the face, whether a row or a column is fixed, which one, and
//! whether its three cells are walked backwards. The segment order is the
//! direction stickers travel on a clockwise slice turn.

use crate::face::{Face, Facelet};

/// A cubelet position or direction in renderer space (x right, y front, z up).
pub type Coord = (i32, i32, i32);

/// The three independent slice axes, named after the face nearest slice 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    F,
    R,
    U,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::F, Axis::R, Axis::U];

    /// The four border runs of slice `index` (0 = nearest the axis face,
    /// 2 = nearest the opposite face).
    pub const fn segments(self, index: usize) -> [SliceSegment; 4] {
        let far = 2 - index;
        match self {
            Axis::F => [
                SliceSegment::row(Face::U, far, false),
                SliceSegment::column(Face::R, index, false),
                SliceSegment::row(Face::D, index, true),
                SliceSegment::column(Face::L, far, true),
            ],
            Axis::R => [
                SliceSegment::column(Face::U, far, true),
                SliceSegment::column(Face::B, index, false),
                SliceSegment::column(Face::D, far, true),
                SliceSegment::column(Face::F, far, true),
            ],
            Axis::U => [
                SliceSegment::row(Face::L, index, false),
                SliceSegment::row(Face::B, index, false),
                SliceSegment::row(Face::R, index, false),
                SliceSegment::row(Face::F, index, false),
            ],
        }
    }
}

/// A run of three stickers on one face that belongs to a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSegment {
    pub face: Face,
    /// Row fixed (walk columns) when true, column fixed (walk rows) otherwise.
    pub horizontal: bool,
    /// The fixed row or column.
    pub line: usize,
    pub reversed: bool,
}

impl SliceSegment {
    const fn row(face: Face, line: usize, reversed: bool) -> Self {
        Self {
            face,
            horizontal: true,
            line,
            reversed,
        }
    }

    const fn column(face: Face, line: usize, reversed: bool) -> Self {
        Self {
            face,
            horizontal: false,
            line,
            reversed,
        }
    }

    /// The run's three stickers in walk order.
    pub const fn cells(&self) -> [Facelet; 3] {
        let mut cells = [Facelet::new(self.face, 0, 0); 3];
        let mut step = 0;
        while step < 3 {
            let along = if self.reversed { 2 - step } else { step };
            cells[step] = if self.horizontal {
                Facelet::new(self.face, self.line, along)
            } else {
                Facelet::new(self.face, along, self.line)
            };
            step += 1;
        }
        cells
    }
}

/// A sticker as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub facelet: Facelet,
    /// Cubelet carrying the sticker, each coordinate in 0..=2.
    pub cubelet: Coord,
    /// Outward unit normal of the sticker.
    pub normal: Coord,
}

/// Outward normal of a face in renderer space.
pub const fn face_normal(face: Face) -> Coord {
    match face {
        Face::U => (0, 0, 1),
        Face::D => (0, 0, -1),
        Face::F => (0, 1, 0),
        Face::B => (0, -1, 0),
        Face::R => (1, 0, 0),
        Face::L => (-1, 0, 0),
    }
}

/// Maps the exposed side of a cubelet to the facelet it shows.
///
/// Returns `None` when that side of the cubelet is internal.
pub fn sticker_facelet((x, y, z): Coord, face: Face) -> Option<Facelet> {
    let (x, y, z) = (x as usize, y as usize, z as usize);
    match face {
        Face::U if z == 2 => Some(Facelet::new(Face::U, y, x)),
        Face::D if z == 0 => Some(Facelet::new(Face::D, 2 - y, x)),
        Face::F if y == 2 => Some(Facelet::new(Face::F, 2 - z, x)),
        Face::B if y == 0 => Some(Facelet::new(Face::B, 2 - z, 2 - x)),
        Face::L if x == 0 => Some(Facelet::new(Face::L, 2 - z, y)),
        Face::R if x == 2 => Some(Facelet::new(Face::R, 2 - z, 2 - y)),
        _ => None,
    }
}

/// All 54 stickers, cubelet by cubelet in x-major order.
pub fn stickers() -> Vec<Sticker> {
    let mut stickers = Vec::with_capacity(54);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                for face in Face::ALL {
                    if let Some(facelet) = sticker_facelet((x, y, z), face) {
                        stickers.push(Sticker {
                            facelet,
                            cubelet: (x, y, z),
                            normal: face_normal(face),
                        });
                    }
                }
            }
        }
    }
    stickers
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn test_segments_stay_on_side_faces() {
        for axis in Axis::ALL {
            let axis_face = match axis {
                Axis::F => Face::F,
                Axis::R => Face::R,
                Axis::U => Face::U,
            };
            for index in 0..3 {
                for segment in axis.segments(index) {
                    assert_ne!(segment.face, axis_face);
                    assert_ne!(segment.face, axis_face.opposite());
                }
            }
        }
    }

    #[test]
    fn test_slices_partition_side_stickers() {
        // the three slices of an axis cover each side-face sticker exactly once
        for axis in Axis::ALL {
            let mut seen = FxHashSet::default();
            for index in 0..3 {
                for segment in axis.segments(index) {
                    for cell in segment.cells() {
                        assert!(seen.insert(cell), "{cell} appears twice on {axis:?}");
                    }
                }
            }
            assert_eq!(seen.len(), 36);
        }
    }

    #[test]
    fn test_reversed_segment_walks_backwards() {
        let segment = Axis::F.segments(0)[2];
        assert_eq!(
            segment.cells(),
            [
                Facelet::new(Face::D, 0, 2),
                Facelet::new(Face::D, 0, 1),
                Facelet::new(Face::D, 0, 0),
            ]
        );
    }

    #[test]
    fn test_stickers_cover_every_facelet_once() {
        let all = stickers();
        assert_eq!(all.len(), 54);
        let unique: FxHashSet<Facelet> = all.iter().map(|s| s.facelet).collect();
        assert_eq!(unique.len(), 54);
    }

    #[test]
    fn test_sticker_normals_point_out_of_cube() {
        for sticker in stickers() {
            let (x, y, z) = sticker.cubelet;
            let (nx, ny, nz) = sticker.normal;
            let outside = (x + nx, y + ny, z + nz);
            assert!(
                !(0..3).contains(&outside.0)
                    || !(0..3).contains(&outside.1)
                    || !(0..3).contains(&outside.2),
                "sticker {} faces into the cube",
                sticker.facelet
            );
        }
    }

    #[test]
    fn test_centers_sit_on_face_centers() {
        for sticker in stickers() {
            if sticker.facelet.is_center() {
                let (x, y, z) = sticker.cubelet;
                let (nx, ny, nz) = sticker.normal;
                assert_eq!((x - 1, y - 1, z - 1), (nx, ny, nz));
            }
        }
    }
}
