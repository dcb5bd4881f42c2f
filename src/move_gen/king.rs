//! King move generation
//!
//! Kings move one square in any direction. Castling is not generated here:
//! it depends on castling rights, the rook, and check state, so the engine
//! appends it after legality filtering.

use super::{generate_step_moves, MoveSet};
use crate::board::Position;
use crate::types::{Colour, Square};

/// The eight neighbouring squares as (rank, file) deltas
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Generate king moves from a given square
///
/// # Arguments
///
/// * `position` - Position to read occupancy from
/// * `from` - Square the king stands on
/// * `colour` - Colour of the king
/// * `moves` - Output set to append destinations to
pub fn generate_king_moves(position: &Position, from: Square, colour: Colour, moves: &mut MoveSet) {
    generate_step_moves(position, from, colour, &KING_OFFSETS, moves);
}
