//! Type definitions for board coordinates and sides
//!
//! Provides newtype-style coordinates so that ranks and files cannot be mixed
//! up, plus the [`Colour`] of a side with its direction-dependent helpers.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ranks and files on the board
pub const BOARD_SIZE: u8 = 8;

/// One side of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    /// Rank delta of a single pawn step
    pub fn forward(self) -> i8 {
        match self {
            Colour::White => 1,
            Colour::Black => -1,
        }
    }

    /// Rank the side's king and rooks start on
    pub fn home_rank(self) -> u8 {
        match self {
            Colour::White => 0,
            Colour::Black => BOARD_SIZE - 1,
        }
    }

    /// Rank on which this side's pawns promote
    pub fn promotion_rank(self) -> u8 {
        self.opponent().home_rank()
    }

    /// Array slot used for per-colour tables
    pub(crate) fn index(self) -> usize {
        match self {
            Colour::White => 0,
            Colour::Black => 1,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => f.write_str("white"),
            Colour::Black => f.write_str("black"),
        }
    }
}

/// Board square addressed as (rank, file)
///
/// Rank 0 is white's home rank, file 0 is the a-file. Both coordinates are
/// always in `0..8`; use [`Square::offset`] or [`Square::try_new`] when a
/// computed coordinate may fall off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a square from rank and file indices
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::Square;
    ///
    /// let e4 = Square::new(3, 4);
    /// assert_eq!(e4.to_algebraic(), "e4");
    /// ```
    pub fn new(rank: u8, file: u8) -> Self {
        assert!(
            rank < BOARD_SIZE && file < BOARD_SIZE,
            "Square ({rank}, {file}) is off the board"
        );
        Square { rank, file }
    }

    /// Create a square from signed coordinates, `None` when off the board
    pub fn try_new(rank: i8, file: i8) -> Option<Self> {
        if in_bounds(rank, file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return None,
        };
        let rank = match rank_char.to_digit(10)? as u8 {
            n @ 1..=8 => n - 1,
            _ => return None,
        };

        Some(Square { rank, file })
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, self.rank + 1)
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    /// Square shifted by the given deltas, `None` when the result is off the board
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        Square::try_new(self.rank as i8 + rank_delta, self.file as i8 + file_delta)
    }

    /// Linear index `rank * 8 + file` (0-63)
    pub fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// All 64 squares, rank by rank starting from a1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = RulesError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Ok(Square { rank, file })
        } else {
            Err(RulesError::OffBoard { rank, file })
        }
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.rank, square.file)
    }
}

/// Whether both coordinates lie in `0..8`
#[inline]
pub fn in_bounds(rank: i8, file: i8) -> bool {
    let size = BOARD_SIZE as i8;
    (0..size).contains(&rank) && (0..size).contains(&file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square.file(), 4);
        assert_eq!(square.rank(), 3);
        assert_eq!(square.to_algebraic(), "e4");

        let corner = Square::from_algebraic("a1").unwrap();
        assert_eq!(corner, Square::new(0, 0));

        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a10"), None);
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let h8 = Square::new(7, 7);
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-1, -1), Some(Square::new(6, 6)));

        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(2, 1), Some(Square::new(2, 1)));
    }

    #[test]
    fn test_square_try_from_tuple() {
        assert_eq!(Square::try_from((3, 4)).unwrap(), Square::new(3, 4));
        assert!(matches!(
            Square::try_from((8, 0)),
            Err(RulesError::OffBoard { rank: 8, file: 0 })
        ));
        assert!(Square::try_from((0, 200)).is_err());

        let (rank, file): (u8, u8) = Square::new(6, 1).into();
        assert_eq!((rank, file), (6, 1));
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(7, 7));
        assert!(!in_bounds(8, 0));
        assert!(!in_bounds(0, -1));
    }

    #[test]
    fn test_all_squares_in_index_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for (i, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), i);
        }
    }

    #[test]
    fn test_colour_helpers() {
        assert_eq!(Colour::White.opponent(), Colour::Black);
        assert_eq!(Colour::Black.opponent(), Colour::White);
        assert_eq!(Colour::White.forward(), 1);
        assert_eq!(Colour::Black.forward(), -1);
        assert_eq!(Colour::White.promotion_rank(), 7);
        assert_eq!(Colour::Black.promotion_rank(), 0);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_square_new_rejects_off_board() {
        let _ = Square::new(8, 0);
    }
}
