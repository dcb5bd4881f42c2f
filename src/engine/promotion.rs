//! Pawn promotion bookkeeping
//!
//! When a pawn's legal move reaches its last rank the engine does not touch
//! the board. It records the move here and waits for the caller to pick one
//! of the four promotion pieces; only then is the move executed.

use crate::error::{RulesError, RulesResult};
use crate::pieces::{promotion_pieces, Piece, PieceKind};
use crate::types::{Colour, Square};

/// A pawn move suspended until a promotion piece is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    /// Square the pawn stands on
    pub from: Square,
    /// Last-rank square the pawn moves to
    pub to: Square,
    /// Side promoting
    pub colour: Colour,
}

/// Check if moving `piece` to `target` results in promotion
pub fn is_promotion_move(piece: Piece, target: Square) -> bool {
    piece.is_pawn() && target.rank() == piece.colour.promotion_rank()
}

/// The promotion piece of `kind` for `colour`
///
/// Fails with [`RulesError::InvalidPromotion`] unless `kind` is one of the
/// four offered kinds.
pub fn promotion_piece(colour: Colour, kind: PieceKind) -> RulesResult<Piece> {
    promotion_pieces(colour)
        .into_iter()
        .find(|piece| piece.kind == kind)
        .ok_or(RulesError::InvalidPromotion { kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_promotion_move() {
        let white_pawn = Piece::new(PieceKind::Pawn, Colour::White).moved();
        let black_pawn = Piece::new(PieceKind::Pawn, Colour::Black).moved();

        assert!(is_promotion_move(white_pawn, Square::new(7, 2)));
        assert!(!is_promotion_move(white_pawn, Square::new(6, 2)));
        assert!(is_promotion_move(black_pawn, Square::new(0, 5)));
        assert!(!is_promotion_move(black_pawn, Square::new(7, 5)));

        let rook = Piece::new(PieceKind::Rook, Colour::White);
        assert!(!is_promotion_move(rook, Square::new(7, 0)));
    }

    #[test]
    fn test_promotion_piece_validates_kind() {
        let queen = promotion_piece(Colour::White, PieceKind::Queen).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.colour, Colour::White);
        assert!(queen.has_moved);

        assert!(matches!(
            promotion_piece(Colour::Black, PieceKind::King),
            Err(RulesError::InvalidPromotion {
                kind: PieceKind::King
            })
        ));
        assert!(promotion_piece(Colour::Black, PieceKind::Pawn).is_err());
    }
}
