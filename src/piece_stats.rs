//! Per-class health and damage table.
//!
//! The table is filled once at setup and then shared by every piece created
//! over the lifetime of a game, including promotions and crazyhouse
//! placements, so late-spawned pieces match their siblings.

use rand::RngExt;

use crate::game_config::StatAssignment;
use crate::piece_class::PieceClass;

/// (max health, damage per hit) indexed by `PieceClass::code() - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceStats {
    table: [(i32, i32); 6],
}

const RANDOM_HEALTH_RANGE: std::ops::RangeInclusive<i32> = 10..=150;
const RANDOM_DAMAGE_RANGE: std::ops::RangeInclusive<i32> = 10..=120;

impl PieceStats {
    /// The hand-tuned default values. Tough pawns with lethal counterattacks,
    /// a glass-cannon queen, and a durable but weakly-armed rook.
    pub fn fixed() -> Self {
        PieceStats {
            table: [
                (120, 120), // pawn
                (45, 32),   // bishop
                (32, 45),   // knight
                (90, 15),   // rook
                (10, 60),   // queen
                (150, 35),  // king
            ],
        }
    }

    /// Draws a fresh table from the allowed ranges.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let mut table = [(0, 0); 6];
        for entry in table.iter_mut() {
            *entry = (
                rng.random_range(RANDOM_HEALTH_RANGE),
                rng.random_range(RANDOM_DAMAGE_RANGE),
            );
        }
        PieceStats { table }
    }

    pub fn from_assignment(assignment: StatAssignment) -> Self {
        match assignment {
            StatAssignment::Fixed => PieceStats::fixed(),
            StatAssignment::Random => PieceStats::random(),
        }
    }

    pub fn max_health(&self, class: PieceClass) -> i32 {
        self.table[(class.code() - 1) as usize].0
    }

    pub fn damage(&self, class: PieceClass) -> i32 {
        self.table[(class.code() - 1) as usize].1
    }
}
