//! Sliding piece move generation
//!
//! Common ray walk for bishops, rooks and queens. From the origin square each
//! direction is followed one step at a time:
//! 1. Off the board: stop the ray
//! 2. Empty square: positional move, keep walking
//! 3. Enemy piece: attacking move, stop the ray
//! 4. Own piece: stop the ray without recording

use super::{record_destination, Landing, MoveSet};
use crate::board::Position;
use crate::types::{Colour, Square};

/// Orthogonal directions as (rank, file) deltas
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal directions as (rank, file) deltas
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk every ray in `directions` from `from`
pub fn generate_sliding_moves(
    position: &Position,
    from: Square,
    colour: Colour,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(rank_delta, file_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(rank_delta, file_delta) {
            if record_destination(position, next, colour, moves) != Landing::Empty {
                break;
            }
            current = next;
        }
    }
}
