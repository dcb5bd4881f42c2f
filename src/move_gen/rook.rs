//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked.

use super::sliding::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};
use super::MoveSet;
use crate::board::Position;
use crate::types::{Colour, Square};

/// Generate rook moves from a given square
pub fn generate_rook_moves(position: &Position, from: Square, colour: Colour, moves: &mut MoveSet) {
    generate_sliding_moves(position, from, colour, &ORTHOGONAL_DIRECTIONS, moves);
}
