//! Piece catalog
//!
//! A piece is a plain value of (kind, colour, has-moved). The moved flag is
//! flipped the first time the piece is placed on a new square and never goes
//! back; it only matters for castling rights and the pawn double step.

use crate::types::Colour;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order they are offered
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Standard back rank, a-file to h-file
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Whether a pawn may promote to this kind
    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    fn symbol(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Piece {
            kind,
            colour,
            has_moved: false,
        }
    }

    /// The same piece with its moved flag set
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_rook(self) -> bool {
        self.kind == PieceKind::Rook
    }

    /// FEN-style letter: uppercase for white, lowercase for black
    pub fn symbol(self) -> char {
        let symbol = self.kind.symbol();
        match self.colour {
            Colour::White => symbol.to_ascii_uppercase(),
            Colour::Black => symbol,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.colour, self.kind)
    }
}

/// The four pieces offered to a promoting pawn of `colour`
///
/// Ordered knight, bishop, rook, queen. All of them are already flagged as
/// moved; a promoted rook can never castle.
pub fn promotion_pieces(colour: Colour) -> [Piece; 4] {
    PieceKind::PROMOTIONS.map(|kind| Piece::new(kind, colour).moved())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_unmoved() {
        let rook = Piece::new(PieceKind::Rook, Colour::White);
        assert!(!rook.has_moved);
        assert!(rook.moved().has_moved);
        assert_eq!(rook.moved().kind, PieceKind::Rook);
        assert_eq!(rook.moved().colour, Colour::White);
    }

    #[test]
    fn test_moved_is_idempotent() {
        let pawn = Piece::new(PieceKind::Pawn, Colour::Black).moved();
        assert_eq!(pawn.moved(), pawn);
    }

    #[test]
    fn test_promotion_pieces_order_and_flags() {
        let options = promotion_pieces(Colour::Black);
        let kinds: Vec<PieceKind> = options.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen
            ]
        );
        assert!(options.iter().all(|p| p.has_moved));
        assert!(options.iter().all(|p| p.colour == Colour::Black));
    }

    #[test]
    fn test_promotion_choices() {
        assert!(PieceKind::Queen.is_promotion_choice());
        assert!(PieceKind::Knight.is_promotion_choice());
        assert!(!PieceKind::King.is_promotion_choice());
        assert!(!PieceKind::Pawn.is_promotion_choice());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::new(PieceKind::Knight, Colour::White).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Colour::Black).symbol(), 'n');
    }
}
