//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! position parsing, and move application. The enum `ChessErrors` is the
//! single error type across the crate so that callers can propagate with `?`
//! and match on one taxonomy. Variants carry contextual payloads where that
//! helps diagnostics.
//!
//! Usage guidelines:
//! - Input-shaped failures (selecting nothing, promoting to an illegal class,
//!   placing on an occupied cell) are recoverable; callers re-prompt.
//! - Setup-shaped failures (`WrongKingCount`, `KingAlreadyCapturable`,
//!   `EmptyPositionDescriptor`) are configuration-time fatal: continuing with
//!   such a position would make every downstream legality answer meaningless,
//!   so binaries should abort with the diagnostic.

use crate::board_location::Cell;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessErrors {
    /// A cell outside the board dimensions was produced or requested.
    OutOfBounds(Cell),

    /// A position descriptor contained no rank data at all.
    EmptyPositionDescriptor,

    /// A loaded position does not have exactly one king for the given team.
    ///
    /// Payload: (team, number of kings found).
    WrongKingCount(PieceTeam, usize),

    /// A loaded position lets the side to move capture the enemy king
    /// immediately, which no legal game can reach.
    KingAlreadyCapturable(PieceTeam),

    /// An operation expected a piece at the given cell and found none.
    NoPieceAtCell(Cell),

    /// Attempted to put a piece on a cell that is already occupied.
    CellOccupied(Cell),

    /// An action was attempted after the game reached a terminal state.
    GameAlreadyFinished,

    /// An action was attempted while a pawn promotion is still waiting for
    /// its replacement class.
    PromotionUnresolved(Cell),

    /// `promote_pawn` was called with no promotion pending.
    NoPromotionPending,

    /// A pawn may only promote to a knight, bishop, rook or queen.
    InvalidPromotionClass(PieceClass),

    /// A crazyhouse placement was requested but the game was not configured
    /// with the crazyhouse rules.
    CrazyhouseDisabled,

    /// The placement pool holds no spent piece of the requested class.
    CasualtyPoolEmpty(PieceClass),

    /// The requested placement cell is occupied, or placing there would leave
    /// the placer's own king attacked.
    PlacementBlocked(Cell),
}
