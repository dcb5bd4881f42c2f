//! Queen move generation
//!
//! Queens combine the rook and bishop patterns: all eight ray directions.

use super::bishop;
use super::rook;
use super::MoveSet;
use crate::board::Position;
use crate::types::{Colour, Square};

/// Generate queen moves from a given square
///
/// Diagonal rays first, then orthogonal ones.
pub fn generate_queen_moves(
    position: &Position,
    from: Square,
    colour: Colour,
    moves: &mut MoveSet,
) {
    bishop::generate_bishop_moves(position, from, colour, moves);
    rook::generate_rook_moves(position, from, colour, moves);
}
