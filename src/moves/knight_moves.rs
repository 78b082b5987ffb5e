use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::moves::move_options::{step_offsets, MoveOptions};
use crate::piece_team::PieceTeam;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_options(cell: Cell, team: PieceTeam, grid: &BoardGrid) -> MoveOptions {
    step_offsets(cell, team, grid, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_knight_has_two_hops() {
        let grid = BoardGrid::new((8, 8));
        let out = knight_options((0, 0), PieceTeam::White, &grid);
        assert_eq!(out.moves.len(), 2);
        assert!(out.contains_move((1, 2)));
        assert!(out.contains_move((2, 1)));
    }
}
