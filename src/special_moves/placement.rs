//! Crazyhouse placement eligibility.
//!
//! A side's placement pool holds the classes of the enemy pieces it has
//! felled (kings excluded). A cell is placeable when empty; under standard
//! rules the placement-safety scan additionally marks the candidate cell
//! with the obstacle code on a scratch grid and rejects the cell if the
//! placer's king is attacked in that position. The obstacle is deliberately
//! neither empty nor a real piece: rays must stop on it without it reading
//! as capturable material.

use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::game_config::RuleMode;
use crate::legality::attack_scan::is_cell_attacked;
use crate::piece_class::{PieceClass, OBSTACLE_CODE};
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// Classes `team` may currently place, one entry per spent enemy piece.
pub fn placement_pool(register: &PieceRegister, team: PieceTeam) -> Vec<PieceClass> {
    register
        .casualties(team.opponent())
        .iter()
        .filter(|p| p.class != PieceClass::King)
        .map(|p| p.class)
        .collect()
}

pub fn is_placement_safe(
    cell: Cell,
    team: PieceTeam,
    register: &PieceRegister,
    grid: &BoardGrid,
) -> bool {
    if !grid.is_empty_cell(cell) {
        return false;
    }
    let mut scratch = grid.clone();
    scratch.set_code(cell, OBSTACLE_CODE * team.sign());
    match register.king_cell(team) {
        Some(king) => !is_cell_attacked(king, team, register, &scratch),
        None => true,
    }
}

/// Every cell `team` may place on right now.
pub fn placement_cells(
    team: PieceTeam,
    register: &PieceRegister,
    grid: &BoardGrid,
    rule_mode: RuleMode,
) -> Vec<Cell> {
    grid.empty_cells()
        .into_iter()
        .filter(|&cell| match rule_mode {
            RuleMode::Standard => is_placement_safe(cell, team, register, grid),
            RuleMode::KingCapture => true,
        })
        .collect()
}
