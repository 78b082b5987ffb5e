//! Raw candidate generation shared across piece kinds.
//!
//! Everything here is pure and check-blind: it maps a piece, its cell, and a
//! grid snapshot to the cells it could move to or attack, with no opinion on
//! whether doing so would expose its own king.

use crate::board_grid::BoardGrid;
use crate::board_location::{offset_cell, Cell};
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_team::PieceTeam;

/// Candidate destinations split the way the rules treat them: move cells are
/// empty, attack cells hold an enemy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveOptions {
    pub moves: Vec<Cell>,
    pub attacks: Vec<Cell>,
}

impl MoveOptions {
    pub fn new() -> Self {
        MoveOptions::default()
    }

    pub fn merge(&mut self, other: MoveOptions) {
        self.moves.extend(other.moves);
        self.attacks.extend(other.attacks);
    }

    pub fn contains_move(&self, cell: Cell) -> bool {
        self.moves.contains(&cell)
    }

    pub fn contains_attack(&self, cell: Cell) -> bool {
        self.attacks.contains(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }

    /// Move and attack cells together; this union is what attack scans test.
    pub fn all(&self) -> impl Iterator<Item = &Cell> {
        self.moves.iter().chain(self.attacks.iter())
    }
}

/// Walks each ray until the board edge or the first occupied cell. An enemy
/// occupant yields one attack and ends the ray; a friendly occupant just
/// ends it.
pub fn slide_rays(
    cell: Cell,
    team: PieceTeam,
    grid: &BoardGrid,
    directions: &[(i8, i8)],
) -> MoveOptions {
    let mut out = MoveOptions::new();
    let (columns, rows) = grid.dimension();
    let reach = columns.max(rows);
    for dir in directions {
        for i in 1..reach {
            let target = (cell.0 + i * dir.0, cell.1 + i * dir.1);
            if !grid.in_bounds(target) {
                break;
            }
            if !grid.is_empty_cell(target) {
                if grid.is_enemy_at(target, team) {
                    out.attacks.push(target);
                }
                break;
            }
            out.moves.push(target);
        }
    }
    out
}

/// Fixed-offset stepping for knights and kings: empty yields a move, enemy
/// yields an attack, friend or off-board yields nothing.
pub fn step_offsets(
    cell: Cell,
    team: PieceTeam,
    grid: &BoardGrid,
    offsets: &[(i8, i8)],
) -> MoveOptions {
    let mut out = MoveOptions::new();
    let dimension = grid.dimension();
    for off in offsets {
        let target = match offset_cell(&cell, off.0, off.1, &dimension) {
            Ok(target) => target,
            Err(_) => continue,
        };
        if grid.is_empty_cell(target) {
            out.moves.push(target);
        } else if grid.is_enemy_at(target, team) {
            out.attacks.push(target);
        }
    }
    out
}

/// Single dispatch point from piece kind to its generator.
pub fn raw_options(piece: &Piece, grid: &BoardGrid) -> MoveOptions {
    match piece.class {
        PieceClass::Pawn => pawn_moves::pawn_options(piece, grid),
        PieceClass::Bishop => bishop_moves::bishop_options(piece.cell, piece.team, grid),
        PieceClass::Knight => knight_moves::knight_options(piece.cell, piece.team, grid),
        PieceClass::Rook => rook_moves::rook_options(piece.cell, piece.team, grid),
        PieceClass::Queen => queen_moves::queen_options(piece.cell, piece.team, grid),
        PieceClass::King => king_moves::king_options(piece.cell, piece.team, grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_record::Piece;
    use crate::piece_register::PieceRegister;
    use crate::piece_stats::PieceStats;

    fn grid_with(pieces: &[(PieceClass, PieceTeam, Cell)]) -> BoardGrid {
        let stats = PieceStats::fixed();
        let mut register = PieceRegister::new();
        for (class, team, cell) in pieces {
            register.add_piece(Piece::new(*class, *team, *cell, &stats));
        }
        BoardGrid::project(&register, (8, 8))
    }

    #[test]
    fn rays_stop_at_the_first_occupied_cell() {
        let grid = grid_with(&[
            (PieceClass::Rook, PieceTeam::White, (0, 7)),
            (PieceClass::Pawn, PieceTeam::Black, (0, 3)),
            (PieceClass::Pawn, PieceTeam::White, (3, 7)),
        ]);
        let out = slide_rays((0, 7), PieceTeam::White, &grid, &[(0, -1), (1, 0)]);
        // Up the file: three empty cells, then the enemy pawn.
        assert!(out.contains_move((0, 6)));
        assert!(out.contains_move((0, 4)));
        assert!(!out.contains_move((0, 3)));
        assert!(out.contains_attack((0, 3)));
        assert!(!out.contains_move((0, 2)));
        // Along the rank: stops short of the friendly pawn, no attack.
        assert!(out.contains_move((2, 7)));
        assert!(!out.contains_move((3, 7)));
        assert!(!out.contains_attack((3, 7)));
    }

    #[test]
    fn steps_classify_occupancy() {
        let grid = grid_with(&[
            (PieceClass::King, PieceTeam::White, (4, 4)),
            (PieceClass::Pawn, PieceTeam::Black, (4, 3)),
            (PieceClass::Pawn, PieceTeam::White, (5, 4)),
        ]);
        let out = step_offsets((4, 4), PieceTeam::White, &grid, &[(0, -1), (1, 0), (0, 1)]);
        assert!(out.contains_attack((4, 3)));
        assert!(!out.contains_move((5, 4)));
        assert!(!out.contains_attack((5, 4)));
        assert!(out.contains_move((4, 5)));
    }
}
