//! Action labels and terminal results.
//!
//! `ActionKind` names what a single committed action did; `GameResult` names
//! how a finished game ended; `Outcome` is what `commit_action` and its
//! follow-ups hand back to the caller.

use std::fmt;

use crate::piece_team::PieceTeam;

/// What a committed action turned out to be.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ActionKind {
    /// The target was not in the legal option set; nothing changed.
    None,
    Moves,
    Castles,
    /// Damage was dealt but the target survived.
    Attacks,
    /// Damage was dealt and the target was removed from play.
    Takes,
    /// A crazyhouse placement.
    Placed,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::None => "",
            ActionKind::Moves => "moves",
            ActionKind::Castles => "castles",
            ActionKind::Attacks => "attacks",
            ActionKind::Takes => "takes",
            ActionKind::Placed => "placed",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a finished game ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameResult {
    Won(PieceTeam),
    Stalemate,
    DrawByRepetition,
    DrawInsufficientMaterial,
}

impl GameResult {
    pub fn is_draw(&self) -> bool {
        !matches!(self, GameResult::Won(_))
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameResult::Won(PieceTeam::White) => write!(f, "WHITE WON"),
            GameResult::Won(PieceTeam::Black) => write!(f, "BLACK WON"),
            GameResult::Stalemate => write!(f, "STALEMATE"),
            GameResult::DrawByRepetition => write!(f, "DRAW (BY REPETITION)"),
            GameResult::DrawInsufficientMaterial => write!(f, "DRAW"),
        }
    }
}

/// The follow-up condition after a committed action.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Play continues; call `next_turn`.
    None,
    /// The moved pawn reached the far rank; call `promote_pawn` before
    /// anything else.
    PawnPromotion,
    GameFinished(GameResult),
}

/// What `commit_action` reports: what happened, and what must happen next.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ActionReport {
    pub kind: ActionKind,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_strings_match_the_scoreboard() {
        assert_eq!(GameResult::Won(PieceTeam::White).to_string(), "WHITE WON");
        assert_eq!(GameResult::DrawByRepetition.to_string(), "DRAW (BY REPETITION)");
        assert!(GameResult::Stalemate.is_draw());
        assert!(!GameResult::Won(PieceTeam::Black).is_draw());
    }

    #[test]
    fn action_labels() {
        assert_eq!(ActionKind::Takes.label(), "takes");
        assert_eq!(ActionKind::None.label(), "");
    }
}
