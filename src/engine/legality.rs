//! Legal move computation
//!
//! Turns pseudo-legal generator output into legal moves by simulating each
//! candidate on a snapshot and asking whether the mover's king is attacked
//! afterwards.
//!
//! # Threat detection is shallow
//!
//! [`square_under_attack`] looks at the attacker's *pseudo-legal* attacks
//! only. It never filters those attacks for the attacker's own king safety: a
//! pinned piece still gives check. Filtering them would recurse without end.

use super::execute::execute_move;
use crate::board::{LegalMoveTable, Position};
use crate::move_gen::piece_moves;
use crate::pieces::{Piece, PieceKind};
use crate::types::{Colour, Square};
use tracing::trace;

/// Whether any piece of `attacker` could capture on `square`
///
/// An empty square is probed by standing a stand-in piece of the defending
/// side on it in a scratch copy, so pawn diagonals and ray ends count even
/// when nothing is there to capture yet.
pub fn square_under_attack(position: &Position, square: Square, attacker: Colour) -> bool {
    if position.is_empty(square) {
        let mut probe = position.snapshot();
        probe.set_piece(square, Piece::new(PieceKind::Pawn, attacker.opponent()));
        return attacked_by(&probe, square, attacker);
    }
    attacked_by(position, square, attacker)
}

fn attacked_by(position: &Position, square: Square, attacker: Colour) -> bool {
    position
        .occupied_by(attacker)
        .any(|(from, piece)| piece_moves(position, from, piece).attacks.contains(&square))
}

/// Cached king square of `colour`
///
/// # Panics
///
/// Panics when the position has no king of that colour; every position the
/// engine holds has exactly one per side.
pub(crate) fn king_square(position: &Position, colour: Colour) -> Square {
    position
        .king_square(colour)
        .unwrap_or_else(|| panic!("No {colour} king on the board"))
}

/// Whether the side to move may play `from` → `to` without exposing its king
///
/// The move is executed on a snapshot that is dropped on return.
pub fn is_legal(position: &Position, from: Square, to: Square) -> bool {
    let mover = position.side_to_move();
    let mut scratch = position.snapshot();
    execute_move(&mut scratch, from, to);

    let king = king_square(&scratch, mover);
    !square_under_attack(&scratch, king, mover.opponent())
}

/// Castling destinations available to the side to move
///
/// Requires an unmoved king on its home square that is not in check, an
/// unmoved rook of the same colour in the corner, empty squares between them,
/// and the two squares the king crosses not under attack. King-side comes
/// first.
pub fn compute_castling(position: &Position) -> Vec<Square> {
    let colour = position.side_to_move();
    let opponent = colour.opponent();
    let king_at = king_square(position, colour);
    let home = colour.home_rank();

    let Some(king) = position.get(king_at).filter(|piece| piece.is_king()) else {
        panic!("King cache points at {king_at} but no king stands there");
    };
    if king.has_moved || king_at != Square::new(home, 4) {
        return Vec::new();
    }
    if square_under_attack(position, king_at, opponent) {
        return Vec::new();
    }

    let mut castles = Vec::new();
    for (rook_file, step) in [(7u8, 1i8), (0u8, -1i8)] {
        let rook_at = Square::new(home, rook_file);
        let rook_ready = position
            .get(rook_at)
            .is_some_and(|rook| rook.is_rook() && rook.colour == colour && !rook.has_moved);
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_file > 4 { (5, rook_file) } else { (1, 4) };
        let path_clear = (low..high).all(|file| position.is_empty(Square::new(home, file)));
        if !path_clear {
            continue;
        }

        let crossed_safe = [1, 2].iter().all(|&distance| {
            king_at
                .offset(0, step * distance)
                .is_some_and(|square| !square_under_attack(position, square, opponent))
        });
        if crossed_safe {
            if let Some(destination) = king_at.offset(0, 2 * step) {
                castles.push(destination);
            }
        }
    }
    castles
}

/// Rebuild the legal-move table for the side to move
///
/// Every destination produced by the generators is kept only if
/// [`is_legal`] accepts it; castling destinations are appended to the king's
/// positional moves afterwards.
pub fn compute_legal_moves(position: &mut Position) {
    let colour = position.side_to_move();
    let mut table = LegalMoveTable::new();

    for (from, piece) in position.occupied_by(colour) {
        let candidates = piece_moves(position, from, piece);
        let entry = table.get_mut(from);
        entry.attacks = candidates
            .attacks
            .into_iter()
            .filter(|&to| is_legal(position, from, to))
            .collect();
        entry.positions = candidates
            .positions
            .into_iter()
            .filter(|&to| is_legal(position, from, to))
            .collect();
    }

    let castles = compute_castling(position);
    if !castles.is_empty() {
        let king_at = king_square(position, colour);
        trace!("[LEGALITY] {} may castle to {:?}", colour, castles);
        table.get_mut(king_at).positions.extend(castles);
    }

    trace!("[LEGALITY] {} has {} legal moves", colour, table.move_count());
    position.set_legal_moves(table);
}

/// Whether the side to move has no legal move at all
///
/// Checkmate and stalemate both answer `true`.
pub fn check_mate(position: &Position) -> bool {
    position.legal_move_table().is_empty()
}
