//! Position-descriptor export, the reverse of `fen_parser`.
//!
//! Emits the rank layout and side to move, castling availability derived
//! from the king/rook has-moved flags, and a fixed `- 0 1` trailer for the
//! en-passant and clock fields the engine does not track.

use crate::board_grid::BoardGrid;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

pub fn export_position(register: &PieceRegister, grid: &BoardGrid, turn: PieceTeam) -> String {
    let (columns, rows) = grid.dimension();
    let mut out = String::new();

    for row in 0..rows {
        let mut empty_run = 0usize;
        for col in 0..columns {
            let code = grid.code_at((col, row));
            match PieceClass::from_code(code) {
                Some(class) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    let letter = class.letter();
                    out.push(if code > 0 {
                        letter.to_ascii_uppercase()
                    } else {
                        letter
                    });
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if row < rows - 1 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match turn {
        PieceTeam::White => 'w',
        PieceTeam::Black => 'b',
    });

    out.push(' ');
    let mut rights = String::new();
    if can_castle(register, PieceTeam::White, columns - 1) {
        rights.push('K');
    }
    if can_castle(register, PieceTeam::White, 0) {
        rights.push('Q');
    }
    if can_castle(register, PieceTeam::Black, columns - 1) {
        rights.push('k');
    }
    if can_castle(register, PieceTeam::Black, 0) {
        rights.push('q');
    }
    if rights.is_empty() {
        rights.push('-');
    }
    out.push_str(&rights);

    // En passant and move clocks are emitted for form only.
    out.push_str(" - 0 1");
    out
}

fn can_castle(register: &PieceRegister, team: PieceTeam, rook_column: i8) -> bool {
    let king = match register.pieces(team).iter().find(|p| p.class == PieceClass::King) {
        Some(king) if king.first_move => king,
        _ => return false,
    };
    register.pieces(team).iter().any(|p: &Piece| {
        p.class == PieceClass::Rook
            && p.first_move
            && p.cell.0 == rook_column
            && p.cell.1 == king.cell.1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_stats::PieceStats;
    use crate::utils::fen_parser::parse_position;

    fn register_from(descriptor: &str) -> (PieceRegister, BoardGrid, PieceTeam) {
        let parsed = parse_position(descriptor).expect("descriptor should parse");
        let stats = PieceStats::fixed();
        let mut register = PieceRegister::new();
        for (r, row) in parsed.rows.iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                if let Some(class) = PieceClass::from_code(code) {
                    let team = if code > 0 { PieceTeam::White } else { PieceTeam::Black };
                    register.add_piece(Piece::new(class, team, (c as i8, r as i8), &stats));
                }
            }
        }
        let dimension = (parsed.rows[0].len() as i8, parsed.rows.len() as i8);
        let grid = BoardGrid::project(&register, dimension);
        (register, grid, parsed.side_to_move)
    }

    #[test]
    fn default_layout_round_trips() {
        let (register, grid, turn) = register_from("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(
            export_position(&register, &grid, turn),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn moved_rooks_lose_their_letters() {
        let (mut register, grid, turn) = register_from("r3k2r/8/8/8/8/8/8/R3K2R b");
        register.piece_at_mut((0, 0)).expect("a8 rook").first_move = false;
        register.piece_at_mut((4, 7)).expect("e1 king").first_move = false;
        assert_eq!(
            export_position(&register, &grid, turn),
            "r3k2r/8/8/8/8/8/8/R3K2R b k - 0 1"
        );
    }
}
