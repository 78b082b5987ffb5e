use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::moves::move_options::{step_offsets, MoveOptions};
use crate::piece_team::PieceTeam;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_options(cell: Cell, team: PieceTeam, grid: &BoardGrid) -> MoveOptions {
    step_offsets(cell, team, grid, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_king_has_five_steps() {
        let grid = BoardGrid::new((8, 8));
        let out = king_options((0, 4), PieceTeam::Black, &grid);
        assert_eq!(out.moves.len(), 5);
    }
}
