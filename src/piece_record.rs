use crate::board_location::Cell;
use crate::piece_class::PieceClass;
use crate::piece_stats::PieceStats;
use crate::piece_team::PieceTeam;

/// A single piece on the board. The piece list is the source of truth; the
/// grid is only ever a projection of these records.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Piece {
    pub class: PieceClass,
    pub team: PieceTeam,
    pub cell: Cell,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    /// Cleared on the first move; gates double-steps, castling, and the
    /// double-step half of en passant.
    pub first_move: bool,
}

impl Piece {
    pub fn new(class: PieceClass, team: PieceTeam, cell: Cell, stats: &PieceStats) -> Self {
        Piece {
            class,
            team,
            cell,
            health: stats.max_health(class),
            max_health: stats.max_health(class),
            damage: stats.damage(class),
            first_move: true,
        }
    }

    pub fn move_to(&mut self, cell: Cell) {
        self.first_move = false;
        self.cell = cell;
    }

    /// Applies damage; returns true while the piece is still standing.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health > 0
    }

    /// Signed grid code for this piece.
    pub fn grid_code(&self) -> i8 {
        self.class.code() * self.team.sign()
    }
}
