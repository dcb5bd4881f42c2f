//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: two squares on the pawn's first move, only when both the
//!   skipped square and the destination are empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto the live en-passant target, when
//!   the pawn that just double-stepped belongs to the opponent
//!
//! Promotion is not a generator concern; the engine detects a pawn landing on
//! its last rank and suspends the move until a piece is chosen.

use super::MoveSet;
use crate::board::Position;
use crate::pieces::Piece;
use crate::types::Square;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `position` - Position to read occupancy and the en-passant window from
/// * `from` - Square the pawn stands on
/// * `pawn` - The pawn itself; its colour picks the direction and its moved
///   flag gates the double push
/// * `moves` - Output set to append destinations to
pub fn generate_pawn_moves(position: &Position, from: Square, pawn: Piece, moves: &mut MoveSet) {
    let colour = pawn.colour;
    let forward = colour.forward();

    if let Some(single) = from.offset(forward, 0) {
        if position.is_empty(single) {
            moves.positions.push(single);

            if !pawn.has_moved {
                if let Some(double) = from.offset(2 * forward, 0) {
                    if position.is_empty(double) {
                        moves.positions.push(double);
                    }
                }
            }
        }
    }

    for file_delta in [1, -1] {
        let Some(target) = from.offset(forward, file_delta) else {
            continue;
        };

        match position.colour_at(target) {
            Some(occupant) if occupant != colour => moves.attacks.push(target),
            Some(_) => {}
            None => {
                let en_passant = position.en_passant().filter(|window| {
                    window.target == target
                        && position.colour_at(window.victim) == Some(colour.opponent())
                });
                if en_passant.is_some() {
                    moves.attacks.push(target);
                }
            }
        }
    }
}
