//! Pawn candidate generation.
//!
//! The pawn is the only asymmetric piece: diagonal-forward cells are
//! attack-only (and only when an enemy stands there), straight-forward cells
//! are move-only even when an enemy stands ahead, and the double-step needs a
//! virgin pawn with both cells ahead clear. En passant is resolved elsewhere
//! because it depends on the action log, not the grid.

use crate::board_grid::BoardGrid;
use crate::board_location::offset_cell;
use crate::moves::move_options::MoveOptions;
use crate::piece_record::Piece;

pub fn pawn_options(piece: &Piece, grid: &BoardGrid) -> MoveOptions {
    let mut out = MoveOptions::new();
    let forward = piece.team.forward();
    let dimension = grid.dimension();

    for d_col in [-1, 1] {
        if let Ok(target) = offset_cell(&piece.cell, d_col, forward, &dimension) {
            if grid.is_enemy_at(target, piece.team) {
                out.attacks.push(target);
            }
        }
    }

    if let Ok(ahead) = offset_cell(&piece.cell, 0, forward, &dimension) {
        if grid.is_empty_cell(ahead) {
            out.moves.push(ahead);
            if piece.first_move {
                if let Ok(double) = offset_cell(&piece.cell, 0, 2 * forward, &dimension) {
                    if grid.is_empty_cell(double) {
                        out.moves.push(double);
                    }
                }
            }
        }
    }

    out
}
