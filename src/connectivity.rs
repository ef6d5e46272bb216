//! Physical adjacency between stickers on different faces.
//!
//! Adjacency is found by brute force: every slice border is walked as a
//! closed ring and the query sticker's ring neighbours on other faces are
//! collected.

use crate::face::{Face, Facelet};
use crate::geometry::Axis;

/// The twelve border stickers of slice `index` on `axis`, in ring order.
///
/// Rings on the U axis are walked F, R, B, L so that they read left to right
/// around the cube.
pub fn slice_ring(axis: Axis, index: usize) -> [Facelet; 12] {
    let mut segments = axis.segments(index);
    if axis == Axis::U {
        segments.reverse();
    }

    let mut ring = [Facelet::new(Face::U, 0, 0); 12];
    for (i, segment) in segments.iter().enumerate() {
        ring[i * 3..i * 3 + 3].copy_from_slice(&segment.cells());
    }
    ring
}

/// The middle sticker of each run in a slice ring (edge stickers, or centers
/// for the middle slice).
pub fn edge_ring(axis: Axis, index: usize) -> [Facelet; 4] {
    let ring = slice_ring(axis, index);
    [ring[1], ring[4], ring[7], ring[10]]
}

/// Stickers on other faces that share a cubelet with `facelet`.
///
/// Edge stickers yield their one partner, corner stickers their two, centers
/// nothing.
pub fn connected_facelets(facelet: Facelet) -> Vec<Facelet> {
    let mut connected = Vec::new();

    for axis in Axis::ALL {
        for index in 0..3 {
            let ring = slice_ring(axis, index);
            // close the ring by repeating its first sticker
            let closed: Vec<Facelet> = ring.iter().copied().chain([ring[0]]).collect();

            for (position, &candidate) in closed.iter().enumerate() {
                if candidate != facelet {
                    continue;
                }
                let before = position.checked_sub(1).map(|p| closed[p]);
                let after = closed.get(position + 1).copied();

                let neighbour = match (before, after) {
                    (Some(b), _) if b.face != facelet.face => Some(b),
                    (_, Some(a)) if a.face != facelet.face => Some(a),
                    _ => None,
                };
                if let Some(neighbour) = neighbour {
                    if !connected.contains(&neighbour) {
                        connected.push(neighbour);
                    }
                }
            }
        }
    }

    connected
}

/// The one sticker sharing an edge cubelet with `facelet`, if it is an edge sticker.
pub fn edge_partner(facelet: Facelet) -> Option<Facelet> {
    match connected_facelets(facelet).as_slice() {
        [partner] => Some(*partner),
        _ => None,
    }
}
