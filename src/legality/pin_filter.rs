//! King-safety pruning of raw candidates.
//!
//! Every surviving destination has been play-tested on a scratch clone of the
//! grid: the piece is relocated there (any occupant captured), and the
//! destination is kept only if the mover's own king is then un-attacked.
//! Cloning per candidate means a failed test can never leak a corrupted
//! board into later queries.

use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::legality::attack_scan::is_cell_attacked_after_capture;
use crate::moves::move_options::MoveOptions;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_register::PieceRegister;

pub fn pin_filter(
    piece: &Piece,
    options: MoveOptions,
    register: &PieceRegister,
    grid: &BoardGrid,
) -> MoveOptions {
    let mut out = MoveOptions::new();
    for &dest in &options.moves {
        if keeps_own_king_safe(piece, dest, register, grid) {
            out.moves.push(dest);
        }
    }
    for &dest in &options.attacks {
        if keeps_own_king_safe(piece, dest, register, grid) {
            out.attacks.push(dest);
        }
    }
    out
}

fn keeps_own_king_safe(
    piece: &Piece,
    dest: Cell,
    register: &PieceRegister,
    grid: &BoardGrid,
) -> bool {
    let mut scratch = grid.clone();
    scratch.set_code(piece.cell, 0);
    scratch.set_code(dest, piece.grid_code());
    let king_cell = if piece.class == PieceClass::King {
        dest
    } else {
        match register.king_cell(piece.team) {
            Some(cell) => cell,
            None => return true,
        }
    };
    !is_cell_attacked_after_capture(king_cell, piece.team, register, &scratch, Some(dest))
}
