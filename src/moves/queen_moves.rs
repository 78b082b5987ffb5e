use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::moves::bishop_moves::bishop_options;
use crate::moves::move_options::MoveOptions;
use crate::moves::rook_moves::rook_options;
use crate::piece_team::PieceTeam;

/// A queen is the union of the rook and bishop rays from her own cell.
pub fn queen_options(cell: Cell, team: PieceTeam, grid: &BoardGrid) -> MoveOptions {
    let mut out = rook_options(cell, team, grid);
    out.merge(bishop_options(cell, team, grid));
    out
}
