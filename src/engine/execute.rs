//! Move execution
//!
//! Applies an already-validated move to a position, including the side
//! effects of the special moves:
//!
//! 1. Place the mover on the destination (flips its moved flag)
//! 2. Clear the source square
//! 3. Open, consume or close the en-passant window (landing on the target
//!    removes the victim pawn)
//! 4. Relocate the rook when the king castles
//! 5. Hand the move to the other side
//!
//! The same code runs on the real position and on the snapshots used for
//! legality checks, so a simulated move has exactly the effects of a real one.

use crate::board::Position;
use crate::pieces::Piece;
use crate::types::Square;
use tracing::debug;

/// King destination file and rook (from, to) files for each castle
const KING_SIDE: (u8, u8, u8) = (6, 7, 5);
const QUEEN_SIDE: (u8, u8, u8) = (2, 0, 3);

/// Execute the move `from` → `to`
///
/// # Panics
///
/// Panics if `from` is empty, or if a castling king finds no rook to
/// relocate. Both mean the move never came from the legal-move table.
pub(crate) fn execute_move(position: &mut Position, from: Square, to: Square) {
    let piece = position
        .get(from)
        .unwrap_or_else(|| panic!("No piece on {from} to move to {to}"));

    position.place(piece, to);
    let may_open_window = position.update_on_placement(piece, to);
    position.clear(from);

    if may_open_window && is_double_step(from, to) {
        open_en_passant(position, from, to);
    } else {
        settle_en_passant(position, piece, to);
    }

    if is_castling(piece, from, to) {
        castle_rook(position, to);
    }

    position.toggle_side();
}

/// Finish a promotion: `promoted` replaces the pawn travelling `from` → `to`
pub(crate) fn execute_promotion(
    position: &mut Position,
    from: Square,
    to: Square,
    promoted: Piece,
) {
    position.place(promoted, to);
    position.update_on_placement(promoted, to);
    position.clear(from);
    settle_en_passant(position, promoted, to);
    position.toggle_side();
}

fn is_double_step(from: Square, to: Square) -> bool {
    from.file() == to.file() && from.rank().abs_diff(to.rank()) == 2
}

fn is_castling(piece: Piece, from: Square, to: Square) -> bool {
    piece.is_king() && from.file().abs_diff(to.file()) == 2
}

/// Record the square a double-stepping pawn skipped over
fn open_en_passant(position: &mut Position, from: Square, to: Square) {
    let skipped = Square::new((from.rank() + to.rank()) / 2, from.file());
    debug!("[EN PASSANT] Window opened on {} (victim {})", skipped, to);
    position.set_en_passant(skipped, to);
}

/// Close the window, removing the victim if the mover landed on the target
///
/// Whatever lands on the target consumes the victim, not only a pawn.
fn settle_en_passant(position: &mut Position, mover: Piece, to: Square) {
    if let Some(window) = position.en_passant() {
        if window.target == to {
            debug!(
                "[EN PASSANT] {} landed on {}, removing pawn on {}",
                mover, to, window.victim
            );
            position.clear(window.victim);
        }
    }
    position.clear_en_passant();
}

/// Move the rook that accompanies a castling king now standing on `king_to`
fn castle_rook(position: &mut Position, king_to: Square) {
    let (_, rook_from_file, rook_to_file) = match king_to.file() {
        file if file == KING_SIDE.0 => KING_SIDE,
        file if file == QUEEN_SIDE.0 => QUEEN_SIDE,
        file => panic!("Castling king landed on file {file}, expected 2 or 6"),
    };

    let rook_from = Square::new(king_to.rank(), rook_from_file);
    let rook_to = Square::new(king_to.rank(), rook_to_file);
    let rook = position
        .get(rook_from)
        .filter(|piece| piece.is_rook())
        .unwrap_or_else(|| panic!("Castling to {king_to} without a rook on {rook_from}"));

    debug!("[CASTLE] Rook {} -> {}", rook_from, rook_to);
    position.place(rook, rook_to);
    position.clear(rook_from);
}
