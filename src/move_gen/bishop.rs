//! Bishop move generation
//!
//! Bishops slide along diagonals until blocked, so they never leave the
//! square colour they start on.

use super::sliding::{generate_sliding_moves, DIAGONAL_DIRECTIONS};
use super::MoveSet;
use crate::board::Position;
use crate::types::{Colour, Square};

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(
    position: &Position,
    from: Square,
    colour: Colour,
    moves: &mut MoveSet,
) {
    generate_sliding_moves(position, from, colour, &DIAGONAL_DIRECTIONS, moves);
}
