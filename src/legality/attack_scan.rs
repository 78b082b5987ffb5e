//! Attacked-cell queries.
//!
//! A cell counts as attacked when any opposing piece's raw candidate set
//! (moves and attacks together) reaches it. Scans run against whichever grid
//! they are handed, so callers can probe hypothetical positions by passing a
//! scratch clone.

use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::moves::move_options::raw_options;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

pub fn is_cell_attacked(
    cell: Cell,
    defender: PieceTeam,
    register: &PieceRegister,
    grid: &BoardGrid,
) -> bool {
    is_cell_attacked_after_capture(cell, defender, register, grid, None)
}

/// Like [`is_cell_attacked`], for hypothetical positions in which the piece
/// standing on `captured` has been taken and must not contribute options.
pub fn is_cell_attacked_after_capture(
    cell: Cell,
    defender: PieceTeam,
    register: &PieceRegister,
    grid: &BoardGrid,
    captured: Option<Cell>,
) -> bool {
    for piece in register.pieces(defender.opponent()) {
        if Some(piece.cell) == captured {
            continue;
        }
        if raw_options(piece, grid).all().any(|&c| c == cell) {
            return true;
        }
    }
    false
}
