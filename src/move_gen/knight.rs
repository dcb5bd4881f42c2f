//! Knight move generation
//!
//! Knights jump in an L-shape (two squares one way, one square perpendicular)
//! and are never blocked by pieces in between.

use super::{generate_step_moves, MoveSet};
use crate::board::Position;
use crate::types::{Colour, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, -2),
    (-1, 2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Generate knight moves from a given square
pub fn generate_knight_moves(
    position: &Position,
    from: Square,
    colour: Colour,
    moves: &mut MoveSet,
) {
    generate_step_moves(position, from, colour, &KNIGHT_OFFSETS, moves);
}
