//! Error types for the rules engine
//!
//! Every variant here is recoverable: the engine rejects the request without
//! touching the position and the caller may retry. Broken internal invariants
//! are not represented here; they panic.

use crate::pieces::PieceKind;
use crate::types::Square;

/// Errors returned by engine commands and settings I/O
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Destination is not in the cached legal set of the source square
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn promotion must be confirmed before any other move
    #[error("A promotion on {square} is waiting for a piece choice")]
    PromotionPending { square: Square },

    /// Promotion confirmed while nothing is waiting for one
    #[error("No promotion is pending")]
    NoPromotionPending,

    /// Chosen kind is not one of the four promotion options
    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// Coordinates outside the 8x8 board
    #[error("Square ({rank}, {file}) is off the board")]
    OffBoard { rank: u8, file: u8 },

    /// Position handed to the engine breaks a structural rule
    #[error("Invalid setup: {message}")]
    InvalidSetup { message: String },

    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
