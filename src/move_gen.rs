//! Pseudo-legal move generation
//!
//! Each piece kind has a generator that reads a position and a source square
//! and returns a [`MoveSet`] split into two halves:
//!
//! - **attacks**: destinations holding an enemy piece (and, for pawns, the
//!   live en-passant target)
//! - **positions**: destinations that are empty
//!
//! Generators ignore king safety entirely. The engine filters their output
//! through a simulated move, and threat detection only ever looks at the
//! attacks half.
//!
//! ## Occupancy rule
//!
//! Shared by every piece except pawns:
//! - empty square: positional destination
//! - enemy piece: attacking destination
//! - own piece: excluded
//!
//! Castling is not produced here. It depends on rook and check state outside
//! a single square's view and is appended by the engine.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::board::Position;
use crate::pieces::{Piece, PieceKind};
use crate::types::{Colour, Square};

/// Destinations reachable by one piece, split by what they land on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub attacks: Vec<Square>,
    pub positions: Vec<Square>,
}

impl MoveSet {
    pub const fn new() -> Self {
        MoveSet {
            attacks: Vec::new(),
            positions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty() && self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attacks.len() + self.positions.len()
    }

    /// Whether `square` is in either half
    pub fn contains(&self, square: Square) -> bool {
        self.attacks.contains(&square) || self.positions.contains(&square)
    }

    /// All destinations, attacks first
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.attacks.iter().chain(self.positions.iter()).copied()
    }
}

/// What a piece finds on a destination square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Landing {
    Empty,
    Enemy,
    Own,
}

impl Landing {
    pub(crate) fn at(position: &Position, square: Square, mover: Colour) -> Self {
        match position.colour_at(square) {
            None => Landing::Empty,
            Some(colour) if colour == mover => Landing::Own,
            Some(_) => Landing::Enemy,
        }
    }
}

/// Apply the occupancy rule to a single destination
///
/// Returns what was found so sliding pieces know whether to keep walking.
pub(crate) fn record_destination(
    position: &Position,
    target: Square,
    mover: Colour,
    moves: &mut MoveSet,
) -> Landing {
    let landing = Landing::at(position, target, mover);
    match landing {
        Landing::Empty => moves.positions.push(target),
        Landing::Enemy => moves.attacks.push(target),
        Landing::Own => {}
    }
    landing
}

/// Apply the occupancy rule to a fixed list of single-step offsets
pub(crate) fn generate_step_moves(
    position: &Position,
    from: Square,
    colour: Colour,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(rank_delta, file_delta) in offsets {
        if let Some(target) = from.offset(rank_delta, file_delta) {
            record_destination(position, target, colour, moves);
        }
    }
}

/// Pseudo-legal destinations of `piece` standing on `from`
pub fn piece_moves(position: &Position, from: Square, piece: Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    let colour = piece.colour;

    match piece.kind {
        PieceKind::King => king::generate_king_moves(position, from, colour, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(position, from, colour, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(position, from, colour, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(position, from, colour, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(position, from, colour, &mut moves),
        PieceKind::Pawn => pawn::generate_pawn_moves(position, from, piece, &mut moves),
    }

    moves
}

/// Pseudo-legal destinations of whatever stands on `from`
///
/// An empty square has no moves.
pub fn generate_moves(position: &Position, from: Square) -> MoveSet {
    position
        .get(from)
        .map(|piece| piece_moves(position, from, piece))
        .unwrap_or_default()
}
