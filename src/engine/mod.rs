//! Rules engine - the command/query surface for a game in progress
//!
//! The [`Engine`] owns the authoritative [`Position`] and keeps its legal-move
//! table current. A presentation layer drives it with two commands and reads
//! everything else through queries.
//!
//! # Half-move lifecycle
//!
//! ```text
//! Idle ──attempt_move──► applied ──► legal moves recomputed ──► Idle/terminal
//!   │
//!   └─ pawn to last rank ──► PromotionPending ──confirm_promotion──► applied
//! ```
//!
//! While a promotion is pending the board is untouched and every other move
//! is refused.
//!
//! # Module Structure
//!
//! - `execute` - Applies a move and its special-move side effects
//! - `legality` - Check simulation, threat detection, castling, mate
//! - `promotion` - Pending promotion record and piece selection

pub mod execute;
pub mod legality;
pub mod promotion;


pub use legality::{
    check_mate, compute_castling, compute_legal_moves, is_legal, square_under_attack,
};
pub use promotion::PendingPromotion;

use crate::board::Position;
use crate::error::{RulesError, RulesResult};
use crate::move_gen::MoveSet;
use crate::pieces::{promotion_pieces, Piece, PieceKind};
use crate::settings::EngineSettings;
use crate::types::{Colour, Square};
use execute::{execute_move, execute_promotion};
use promotion::{is_promotion_move, promotion_piece};
use tracing::{debug, info};

/// Result of an accepted [`Engine::attempt_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and the other side is to move
    Applied,
    /// A pawn reached its last rank; nothing moves until
    /// [`Engine::confirm_promotion`] is called
    PromotionRequired,
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        self == MoveOutcome::Applied
    }
}

/// Coarse state of the game, for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has legal moves
    InProgress,
    /// A promotion choice is owed by the side to move
    AwaitingPromotion { square: Square },
    /// The side to move has no legal move (checkmate or stalemate)
    NoLegalMoves { side: Colour },
}

/// Chess rules engine for one game
#[derive(Debug, Clone)]
pub struct Engine {
    position: Position,
    start: Position,
    pending_promotion: Option<PendingPromotion>,
    last_move: Option<(Square, Square)>,
    terminal: bool,
    log_legal_moves: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Engine at the standard starting position
    pub fn new() -> Self {
        Engine::with_settings(&EngineSettings::default())
    }

    /// Engine at the starting layout chosen in `settings`
    pub fn with_settings(settings: &EngineSettings) -> Self {
        let mut engine = Engine::start_from(settings.layout.position());
        engine.log_legal_moves = settings.log_legal_moves;
        engine.refresh();
        engine
    }

    /// Engine at an arbitrary position
    ///
    /// The position must hold exactly one king per colour, and the side that
    /// just moved must not be left in check.
    pub fn from_position(mut position: Position) -> RulesResult<Self> {
        for colour in [Colour::White, Colour::Black] {
            let kings: Vec<Square> = position
                .scan_kings()
                .into_iter()
                .filter(|&(_, king_colour)| king_colour == colour)
                .map(|(square, _)| square)
                .collect();
            match kings.as_slice() {
                [square] => position.set_king_square(colour, *square),
                _ => {
                    return Err(RulesError::InvalidSetup {
                        message: format!("expected one {colour} king, found {}", kings.len()),
                    })
                }
            }
        }

        let waiting = position.side_to_move().opponent();
        let waiting_king = legality::king_square(&position, waiting);
        if square_under_attack(&position, waiting_king, position.side_to_move()) {
            return Err(RulesError::InvalidSetup {
                message: format!("{waiting} is in check but it is not their move"),
            });
        }

        let mut engine = Engine::start_from(position);
        engine.refresh();
        Ok(engine)
    }

    fn start_from(position: Position) -> Self {
        Engine {
            start: position.snapshot(),
            position,
            pending_promotion: None,
            last_move: None,
            terminal: false,
            log_legal_moves: false,
        }
    }

    /// Return to the position the engine was created with
    pub fn reset(&mut self) {
        info!("[GAME] Reset to starting position");
        self.position = self.start.snapshot();
        self.pending_promotion = None;
        self.last_move = None;
        self.refresh();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.get(square)
    }

    /// Side to move
    pub fn current_colour(&self) -> Colour {
        self.position.side_to_move()
    }

    /// Legal destinations of the piece on `square`, split into attacks and
    /// positional moves
    pub fn legal_destinations(&self, square: Square) -> &MoveSet {
        self.position.legal_moves(square)
    }

    /// Whether the piece on `square` may move at all
    pub fn is_selectable(&self, square: Square) -> bool {
        !self.legal_destinations(square).is_empty()
    }

    /// Source and destination of the last completed move
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Try to play `from` → `to` for the side to move
    ///
    /// Rejected requests leave the engine untouched and return an error the
    /// caller can ignore or report before trying again.
    ///
    /// # Errors
    ///
    /// - [`RulesError::PromotionPending`] while a promotion awaits its piece
    /// - [`RulesError::IllegalMove`] if `to` is not a legal destination of `from`
    pub fn attempt_move(&mut self, from: Square, to: Square) -> RulesResult<MoveOutcome> {
        if let Some(pending) = self.pending_promotion {
            debug!("[MOVE] Rejected {}-{}: promotion pending on {}", from, to, pending.to);
            return Err(RulesError::PromotionPending { square: pending.to });
        }

        if !self.legal_destinations(from).contains(to) {
            debug!("[MOVE] Rejected illegal move {}-{}", from, to);
            return Err(RulesError::IllegalMove { from, to });
        }
        let Some(piece) = self.position.get(from) else {
            return Err(RulesError::IllegalMove { from, to });
        };

        if is_promotion_move(piece, to) {
            info!("[PROMOTION] Pawn {}-{} needs promotion", from, to);
            self.pending_promotion = Some(PendingPromotion {
                from,
                to,
                colour: piece.colour,
            });
            return Ok(MoveOutcome::PromotionRequired);
        }

        execute_move(&mut self.position, from, to);
        info!("[MOVE] {} {}-{}", piece, from, to);
        self.last_move = Some((from, to));
        self.refresh();
        Ok(MoveOutcome::Applied)
    }

    pub fn is_promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Pieces offered to a promoting pawn of `colour`: knight, bishop, rook, queen
    pub fn promotion_options(&self, colour: Colour) -> [Piece; 4] {
        promotion_pieces(colour)
    }

    /// Complete the pending promotion with a piece of `kind`
    ///
    /// # Errors
    ///
    /// - [`RulesError::NoPromotionPending`] when nothing is waiting
    /// - [`RulesError::InvalidPromotion`] when `kind` is not one of the options
    pub fn confirm_promotion(&mut self, kind: PieceKind) -> RulesResult<()> {
        let Some(pending) = self.pending_promotion else {
            return Err(RulesError::NoPromotionPending);
        };
        let promoted = promotion_piece(pending.colour, kind)?;

        execute_promotion(&mut self.position, pending.from, pending.to, promoted);
        info!("[PROMOTION] Promoted pawn on {} to {}", pending.to, promoted);
        self.pending_promotion = None;
        self.last_move = Some((pending.from, pending.to));
        self.refresh();
        Ok(())
    }

    /// Whether the side to move has no legal move (checkmate or stalemate)
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether the side to move's king is currently attacked
    pub fn king_in_check(&self) -> bool {
        let colour = self.current_colour();
        let king = legality::king_square(&self.position, colour);
        square_under_attack(&self.position, king, colour.opponent())
    }

    pub fn status(&self) -> GameStatus {
        if let Some(pending) = self.pending_promotion {
            GameStatus::AwaitingPromotion { square: pending.to }
        } else if self.terminal {
            GameStatus::NoLegalMoves {
                side: self.current_colour(),
            }
        } else {
            GameStatus::InProgress
        }
    }

    /// Recompute the legal-move table and the terminal flag
    fn refresh(&mut self) {
        compute_legal_moves(&mut self.position);
        self.terminal = check_mate(&self.position);

        if self.log_legal_moves {
            debug!(
                "[LEGALITY] {} to move with {} legal moves\n{}",
                self.current_colour(),
                self.position.legal_move_table().move_count(),
                self.position
            );
        }
        if self.terminal {
            info!("[GAME] {} has no legal moves", self.current_colour());
        }
    }
}
