//! En-passant eligibility.
//!
//! Read off the action log, not the grid: the opponent's most recent action
//! must have been a pawn double-step, and the capturing pawn must stand
//! beside its landing cell. The capture destination is the cell the
//! double-stepper skipped; the victim is the pawn on the landing cell, which
//! is not the destination's occupant (the destination is empty).

use crate::action_log::ActionLog;
use crate::board_location::Cell;
use crate::outcome::ActionKind;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_register::PieceRegister;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EnPassantOption {
    /// Where the capturing pawn lands.
    pub to: Cell,
    /// Where the captured pawn stands.
    pub victim: Cell,
}

pub fn en_passant_option(
    pawn: &Piece,
    register: &PieceRegister,
    log: &ActionLog,
) -> Option<EnPassantOption> {
    if pawn.class != PieceClass::Pawn {
        return None;
    }
    let last = log.last()?;
    if last.kind != ActionKind::Moves || (last.to.1 - last.from.1).abs() != 2 {
        return None;
    }
    let victim = register.piece_at(last.to)?;
    if victim.class != PieceClass::Pawn || victim.team == pawn.team {
        return None;
    }
    if pawn.cell.1 != last.to.1 || (pawn.cell.0 - last.to.0).abs() != 1 {
        return None;
    }
    let skipped = (last.to.0, (last.to.1 + last.from.1) / 2);
    Some(EnPassantOption {
        to: skipped,
        victim: last.to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_grid::BoardGrid;
    use crate::piece_stats::PieceStats;
    use crate::piece_team::PieceTeam;

    fn setup(pieces: &[(PieceClass, PieceTeam, Cell)]) -> (PieceRegister, BoardGrid) {
        let stats = PieceStats::fixed();
        let mut register = PieceRegister::new();
        for (class, team, cell) in pieces {
            register.add_piece(Piece::new(*class, *team, *cell, &stats));
        }
        let grid = BoardGrid::project(&register, (8, 8));
        (register, grid)
    }

    #[test]
    fn only_right_after_the_double_step() {
        // Black pawn just double-stepped D7-D5; white pawn stands on E5.
        let (mut register, grid) = setup(&[
            (PieceClass::Pawn, PieceTeam::White, (4, 3)),
            (PieceClass::Pawn, PieceTeam::Black, (3, 3)),
        ]);
        register.piece_at_mut((3, 3)).expect("black pawn").first_move = false;

        let mut log = ActionLog::new();
        log.add(grid.clone(), (3, 1), (3, 3), ActionKind::Moves);

        let pawn = *register.piece_at((4, 3)).expect("white pawn");
        let option = en_passant_option(&pawn, &register, &log).expect("eligible");
        assert_eq!(option.to, (3, 2));
        assert_eq!(option.victim, (3, 3));

        // One more logged action and the window is gone.
        log.add(grid.clone(), (0, 6), (0, 5), ActionKind::Moves);
        assert!(en_passant_option(&pawn, &register, &log).is_none());
    }

    #[test]
    fn single_steps_and_distant_pawns_do_not_qualify() {
        let (register, grid) = setup(&[
            (PieceClass::Pawn, PieceTeam::White, (4, 3)),
            (PieceClass::Pawn, PieceTeam::Black, (3, 3)),
        ]);
        let pawn = *register.piece_at((4, 3)).expect("white pawn");

        let mut log = ActionLog::new();
        log.add(grid.clone(), (3, 2), (3, 3), ActionKind::Moves);
        assert!(en_passant_option(&pawn, &register, &log).is_none());

        let mut log = ActionLog::new();
        log.add(grid.clone(), (0, 1), (0, 3), ActionKind::Moves);
        assert!(en_passant_option(&pawn, &register, &log).is_none());
    }
}
