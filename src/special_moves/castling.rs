//! Castling eligibility.
//!
//! A king that has never moved may castle with a never-moved rook on the
//! same row at either board edge, provided every cell strictly between them
//! is empty. Under standard rules the whole king transit, endpoints
//! included, must additionally be un-attacked. The caller commits the pair
//! of relocations atomically.

use std::cmp::{max, min};

use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::game_config::RuleMode;
use crate::legality::attack_scan::is_cell_attacked;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_register::PieceRegister;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastleOption {
    pub king_from: Cell,
    pub king_to: Cell,
    pub rook_from: Cell,
    pub rook_to: Cell,
}

pub fn castle_options(
    king: &Piece,
    register: &PieceRegister,
    grid: &BoardGrid,
    rule_mode: RuleMode,
) -> Vec<CastleOption> {
    let mut out = Vec::new();
    if king.class != PieceClass::King || !king.first_move {
        return out;
    }
    let (columns, _) = grid.dimension();
    let row = king.cell.1;

    for rook in register.pieces(king.team) {
        if rook.class != PieceClass::Rook || !rook.first_move {
            continue;
        }
        if rook.cell.1 != row || (rook.cell.0 != 0 && rook.cell.0 != columns - 1) {
            continue;
        }

        let dir: i8 = if rook.cell.0 > king.cell.0 { 1 } else { -1 };

        let mut between = king.cell.0 + dir;
        let mut clear = true;
        while between != rook.cell.0 {
            if !grid.is_empty_cell((between, row)) {
                clear = false;
                break;
            }
            between += dir;
        }
        if !clear {
            continue;
        }

        let king_to = (king.cell.0 + 2 * dir, row);
        let rook_to = (king.cell.0 + dir, row);
        if !grid.in_bounds(king_to) || king_to == rook.cell {
            continue;
        }

        if rule_mode == RuleMode::Standard {
            let lo = min(king.cell.0, king_to.0);
            let hi = max(king.cell.0, king_to.0);
            if (lo..=hi).any(|c| is_cell_attacked((c, row), king.team, register, grid)) {
                continue;
            }
        }

        out.push(CastleOption {
            king_from: king.cell,
            king_to,
            rook_from: rook.cell,
            rook_to,
        });
    }
    out
}
