//! Immutable game configuration.
//!
//! Every behavior switch the engine honors lives here and is fixed at
//! construction time; nothing reads ambient global state.

/// Which body of rules governs legality and game end.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RuleMode {
    /// Check and pin legality are enforced; games end in checkmate,
    /// stalemate, or a draw.
    Standard,
    /// The simpler rule set: no pin filtering at all, and a side wins the
    /// instant the enemy king's health reaches zero.
    KingCapture,
}

/// How the per-class health/damage table is filled at setup.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StatAssignment {
    /// The hand-tuned default values.
    Fixed,
    /// Values drawn once at setup; promotions and placements reuse them.
    Random,
}

#[derive(Copy, Clone, Debug)]
pub struct GameConfig {
    pub rule_mode: RuleMode,
    /// Spend defeated enemy pieces by re-placing your own copy of them.
    pub crazyhouse: bool,
    pub stat_assignment: StatAssignment,
    /// Present the board from the mover's side each turn. Purely a
    /// presentation choice; stored coordinates never change.
    pub flip_board: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rule_mode: RuleMode::Standard,
            crazyhouse: false,
            stat_assignment: StatAssignment::Fixed,
            flip_board: true,
        }
    }
}

impl GameConfig {
    pub fn king_capture(mut self) -> Self {
        self.rule_mode = RuleMode::KingCapture;
        self
    }

    pub fn with_crazyhouse(mut self) -> Self {
        self.crazyhouse = true;
        self
    }

    pub fn with_random_stats(mut self) -> Self {
        self.stat_assignment = StatAssignment::Random;
        self
    }

    pub fn without_flipping(mut self) -> Self {
        self.flip_board = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.rule_mode, RuleMode::Standard);
        assert!(!config.crazyhouse);
        assert_eq!(config.stat_assignment, StatAssignment::Fixed);
        assert!(config.flip_board);
    }

    #[test]
    fn builders_compose() {
        let config = GameConfig::default().king_capture().with_crazyhouse();
        assert_eq!(config.rule_mode, RuleMode::KingCapture);
        assert!(config.crazyhouse);
    }
}
