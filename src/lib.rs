//! Chess rules engine - legal move generation and rule enforcement
//!
//! Keeps the authoritative position of a two-player game, computes fully
//! legal moves (pseudo-legal generation filtered by check simulation) and
//! enforces castling, en passant, promotion and the no-legal-move end of the
//! game. Rendering and input handling live elsewhere and talk to the
//! [`Engine`] through its query/command methods.
//!
//! # Module Structure
//!
//! - `types` - Squares and colours
//! - `pieces` - Piece kinds and the (kind, colour, moved) piece value
//! - `board` - The [`Position`] aggregate and its legal-move table
//! - `move_gen` - Pseudo-legal generators, one per piece kind
//! - `engine` - Legality filtering, move execution, promotion, mate
//! - `settings` - JSON-backed engine settings
//! - `error` - Recoverable rejections
//!
//! # Example
//!
//! ```rust
//! use chess_rules::{Engine, MoveOutcome, Square};
//!
//! let mut engine = Engine::new();
//! let outcome = engine.attempt_move(Square::new(1, 4), Square::new(3, 4)).unwrap();
//! assert_eq!(outcome, MoveOutcome::Applied);
//! assert_eq!(engine.position().en_passant_target(), Some(Square::new(2, 4)));
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod move_gen;
pub mod pieces;
pub mod settings;
pub mod types;

pub use board::{EnPassant, LegalMoveTable, Position};
pub use engine::{Engine, GameStatus, MoveOutcome, PendingPromotion};
pub use error::{RulesError, RulesResult};
pub use move_gen::{generate_moves, MoveSet};
pub use pieces::{Piece, PieceKind};
pub use settings::{EngineSettings, StartingLayout};
pub use types::{Colour, Square};
