use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::moves::move_options::{slide_rays, MoveOptions};
use crate::piece_team::PieceTeam;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_options(cell: Cell, team: PieceTeam, grid: &BoardGrid) -> MoveOptions {
    slide_rays(cell, team, grid, &BISHOP_DIRECTIONS)
}
