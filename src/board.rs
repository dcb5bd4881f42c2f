//! Board state: occupancy, side to move and the cached legal-move table
//!
//! [`Position`] is the single aggregate the engine mutates. Besides the 8x8
//! grid it carries the cached king squares, the en-passant window and the
//! legal-move table computed after the last mutation.
//!
//! # Snapshots
//!
//! Legality checks never touch the real position. [`Position::snapshot`]
//! returns an independent copy (without the legal table) that a single
//! simulation owns and drops when it is done.

use crate::move_gen::MoveSet;
use crate::pieces::{Piece, PieceKind};
use crate::types::{in_bounds, Colour, Square, BOARD_SIZE};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Live en-passant window opened by a double pawn step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassant {
    /// Square skipped by the double step; a capturing pawn lands here
    pub target: Square,
    /// Square of the pawn removed when the capture happens
    pub victim: Square,
}

/// Legal destinations for every square, as of the last recomputation
#[derive(Debug, Clone, Default)]
pub struct LegalMoveTable {
    entries: Vec<MoveSet>,
}

static NO_MOVES: MoveSet = MoveSet::new();

impl LegalMoveTable {
    /// Table with an empty entry for each of the 64 squares
    pub fn new() -> Self {
        LegalMoveTable {
            entries: vec![MoveSet::default(); SIZE * SIZE],
        }
    }

    /// Legal destinations of the piece on `square`
    ///
    /// Squares without a piece of the side to move, and tables that were
    /// never computed, yield an empty set.
    pub fn get(&self, square: Square) -> &MoveSet {
        self.entries.get(square.index()).unwrap_or(&NO_MOVES)
    }

    pub(crate) fn get_mut(&mut self, square: Square) -> &mut MoveSet {
        if self.entries.is_empty() {
            self.entries = vec![MoveSet::default(); SIZE * SIZE];
        }
        &mut self.entries[square.index()]
    }

    /// True when no square has any legal destination
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(MoveSet::is_empty)
    }

    /// Total number of legal moves in the table
    pub fn move_count(&self) -> usize {
        self.entries.iter().map(MoveSet::len).sum()
    }

    /// Every (source, destination) pair in the table, attacks first per square
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        Square::all().flat_map(move |from| self.get(from).iter().map(move |to| (from, to)))
    }
}

/// The authoritative game position
#[derive(Debug, Clone)]
pub struct Position {
    squares: [[Option<Piece>; SIZE]; SIZE],
    side_to_move: Colour,
    king_squares: [Option<Square>; 2],
    en_passant: Option<EnPassant>,
    legal_moves: LegalMoveTable,
}

impl Default for Position {
    fn default() -> Self {
        Position::empty()
    }
}

impl Position {
    /// Board with no pieces, white to move
    pub fn empty() -> Self {
        Position {
            squares: [[None; SIZE]; SIZE],
            side_to_move: Colour::White,
            king_squares: [None; 2],
            en_passant: None,
            legal_moves: LegalMoveTable::default(),
        }
    }

    /// Standard starting position
    pub fn standard() -> Self {
        let mut position = Position::empty();
        for colour in [Colour::White, Colour::Black] {
            let home = colour.home_rank();
            let pawn_rank = (home as i8 + colour.forward()) as u8;
            for (file, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                position.set_piece(Square::new(home, file as u8), Piece::new(*kind, colour));
                position.set_piece(
                    Square::new(pawn_rank, file as u8),
                    Piece::new(PieceKind::Pawn, colour),
                );
            }
        }
        position
    }

    /// Kings and rooks on their home squares, nothing else
    ///
    /// Both sides can castle either way from the first move.
    pub fn castling_drill() -> Self {
        let mut position = Position::empty();
        for colour in [Colour::White, Colour::Black] {
            let home = colour.home_rank();
            position.set_piece(Square::new(home, 0), Piece::new(PieceKind::Rook, colour));
            position.set_piece(Square::new(home, 4), Piece::new(PieceKind::King, colour));
            position.set_piece(Square::new(home, 7), Piece::new(PieceKind::Rook, colour));
        }
        position
    }

    /// Piece on `square`, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Colour of the piece on `square`, if any
    pub fn colour_at(&self, square: Square) -> Option<Colour> {
        self.get(square).map(|piece| piece.colour)
    }

    /// Put `piece` on `square` as the result of a move
    ///
    /// A piece that has not moved yet is stored as its moved variant.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece.moved());
    }

    /// Put `piece` on `square` unchanged, for setting up positions
    ///
    /// Keeps the king cache in sync when a king is placed.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.rank() as usize][square.file() as usize] = Some(piece);
        if piece.is_king() {
            self.king_squares[piece.colour.index()] = Some(square);
        }
    }

    /// Remove whatever stands on `square`
    pub fn clear(&mut self, square: Square) {
        self.squares[square.rank() as usize][square.file() as usize] = None;
    }

    /// Whether signed coordinates address a square on the board
    pub fn in_bounds(&self, rank: i8, file: i8) -> bool {
        in_bounds(rank, file)
    }

    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, colour: Colour) {
        self.side_to_move = colour;
    }

    /// Hand the move to the other side
    pub fn toggle_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    pub fn opponent_of(&self, colour: Colour) -> Colour {
        colour.opponent()
    }

    /// Cached square of `colour`'s king
    pub fn king_square(&self, colour: Colour) -> Option<Square> {
        self.king_squares[colour.index()]
    }

    /// Post-placement bookkeeping for a moved piece
    ///
    /// Returns `true` exactly when the mover is a pawn that had not moved
    /// before, i.e. when an en-passant window may need to open. Placing a king
    /// updates the cached king square.
    pub fn update_on_placement(&mut self, piece: Piece, destination: Square) -> bool {
        if piece.is_pawn() && !piece.has_moved {
            return true;
        }
        if piece.is_king() {
            self.king_squares[piece.colour.index()] = Some(destination);
        }
        false
    }

    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant.map(|window| window.target)
    }

    pub fn en_passant_victim(&self) -> Option<Square> {
        self.en_passant.map(|window| window.victim)
    }

    pub fn set_en_passant(&mut self, target: Square, victim: Square) {
        self.en_passant = Some(EnPassant { target, victim });
    }

    pub fn clear_en_passant(&mut self) {
        self.en_passant = None;
    }

    /// Independent copy for simulating a move
    ///
    /// The legal-move table is not carried over; a snapshot only answers
    /// occupancy and threat questions.
    pub fn snapshot(&self) -> Position {
        Position {
            squares: self.squares,
            side_to_move: self.side_to_move,
            king_squares: self.king_squares,
            en_passant: self.en_passant,
            legal_moves: LegalMoveTable::default(),
        }
    }

    /// Squares holding a piece of `colour`, in index order
    pub fn occupied_by(&self, colour: Colour) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.get(square)
                .filter(|piece| piece.colour == colour)
                .map(|piece| (square, piece))
        })
    }

    /// Every king on the board as (square, colour)
    pub(crate) fn scan_kings(&self) -> Vec<(Square, Colour)> {
        Square::all()
            .filter_map(|square| {
                self.get(square)
                    .filter(|piece| piece.is_king())
                    .map(|piece| (square, piece.colour))
            })
            .collect()
    }

    pub(crate) fn set_king_square(&mut self, colour: Colour, square: Square) {
        self.king_squares[colour.index()] = Some(square);
    }

    pub fn legal_moves(&self, square: Square) -> &MoveSet {
        self.legal_moves.get(square)
    }

    pub fn legal_move_table(&self) -> &LegalMoveTable {
        &self.legal_moves
    }

    pub(crate) fn set_legal_moves(&mut self, table: LegalMoveTable) {
        self.legal_moves = table;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let symbol = self
                    .get(Square::new(rank, file))
                    .map_or('.', Piece::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let position = Position::standard();
        assert_eq!(
            position.get(Square::new(0, 4)),
            Some(Piece::new(PieceKind::King, Colour::White))
        );
        assert_eq!(
            position.get(Square::new(7, 3)),
            Some(Piece::new(PieceKind::Queen, Colour::Black))
        );
        for file in 0..8 {
            assert_eq!(
                position.get(Square::new(1, file)),
                Some(Piece::new(PieceKind::Pawn, Colour::White))
            );
            assert_eq!(
                position.get(Square::new(6, file)),
                Some(Piece::new(PieceKind::Pawn, Colour::Black))
            );
            for rank in 2..6 {
                assert!(position.is_empty(Square::new(rank, file)));
            }
        }
        assert_eq!(position.king_square(Colour::White), Some(Square::new(0, 4)));
        assert_eq!(position.king_square(Colour::Black), Some(Square::new(7, 4)));
        assert_eq!(position.side_to_move(), Colour::White);
    }

    #[test]
    fn test_place_flips_moved_flag() {
        //! Placing an unmoved piece stores its moved variant; set_piece does not
        let mut position = Position::empty();
        let rook = Piece::new(PieceKind::Rook, Colour::White);

        position.set_piece(Square::new(0, 0), rook);
        assert!(!position.get(Square::new(0, 0)).unwrap().has_moved);

        position.place(rook, Square::new(3, 0));
        let placed = position.get(Square::new(3, 0)).unwrap();
        assert!(placed.has_moved);
        assert_eq!(placed.kind, PieceKind::Rook);
    }

    #[test]
    fn test_update_on_placement() {
        let mut position = Position::empty();
        let pawn = Piece::new(PieceKind::Pawn, Colour::White);
        assert!(position.update_on_placement(pawn, Square::new(3, 4)));
        assert!(!position.update_on_placement(pawn.moved(), Square::new(4, 4)));

        let king = Piece::new(PieceKind::King, Colour::Black);
        assert!(!position.update_on_placement(king, Square::new(6, 3)));
        assert_eq!(position.king_square(Colour::Black), Some(Square::new(6, 3)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        //! Mutating a snapshot never leaks back into the original position
        let position = Position::standard();
        let mut copy = position.snapshot();

        copy.clear(Square::new(1, 4));
        copy.set_en_passant(Square::new(2, 4), Square::new(3, 4));
        copy.toggle_side();

        assert!(position.get(Square::new(1, 4)).is_some());
        assert_eq!(position.en_passant(), None);
        assert_eq!(position.side_to_move(), Colour::White);
        assert_eq!(copy.side_to_move(), Colour::Black);
    }

    #[test]
    fn test_en_passant_window() {
        let mut position = Position::empty();
        assert_eq!(position.en_passant_target(), None);

        position.set_en_passant(Square::new(2, 4), Square::new(3, 4));
        assert_eq!(position.en_passant_target(), Some(Square::new(2, 4)));
        assert_eq!(position.en_passant_victim(), Some(Square::new(3, 4)));

        position.clear_en_passant();
        assert_eq!(position.en_passant(), None);
    }

    #[test]
    fn test_toggle_side() {
        let mut position = Position::empty();
        position.toggle_side();
        assert_eq!(position.side_to_move(), Colour::Black);
        assert_eq!(position.opponent_of(Colour::Black), Colour::White);
        position.toggle_side();
        assert_eq!(position.side_to_move(), Colour::White);
    }

    #[test]
    fn test_uncomputed_table_is_empty() {
        let position = Position::standard();
        assert!(position.legal_move_table().is_empty());
        assert!(position.legal_moves(Square::new(1, 0)).is_empty());
    }

    #[test]
    fn test_display_renders_ranks_top_down() {
        let rendered = Position::standard().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "8 rnbqkbnr");
        assert_eq!(lines[7], "1 RNBQKBNR");
        assert_eq!(lines[8], "  abcdefgh");
    }
}
