//! Position-descriptor parser.
//!
//! Accepts the usual rank notation: ranks separated by `/`, digit runs for
//! empty cells, letters for piece kinds with case carrying the side, and an
//! optional trailing side-to-move token. Parsing is deliberately forgiving:
//! unrecognized characters become empty cells and short rows are zero-padded
//! to the widest row. Semantic validation (king counts, side to move already
//! winning) happens at `GameState` construction, not here.

use crate::chess_errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPosition {
    /// Signed piece codes, top row first. Rectangular after padding.
    pub rows: Vec<Vec<i8>>,
    pub side_to_move: PieceTeam,
}

pub fn parse_position(descriptor: &str) -> Result<ParsedPosition, ChessErrors> {
    let mut fields = descriptor.split_ascii_whitespace();
    let board_field = fields
        .next()
        .ok_or(ChessErrors::EmptyPositionDescriptor)?;

    let mut rows: Vec<Vec<i8>> = Vec::new();
    for rank in board_field.split('/') {
        let mut row: Vec<i8> = Vec::new();
        let mut run = 0usize;
        for c in rank.chars() {
            if let Some(digit) = c.to_digit(10) {
                run = run * 10 + digit as usize;
                continue;
            }
            for _ in 0..run {
                row.push(0);
            }
            run = 0;
            match PieceClass::from_letter(c) {
                Some(class) => {
                    let sign = if c.is_ascii_uppercase() { 1 } else { -1 };
                    row.push(class.code() * sign);
                }
                // Unrecognized characters degrade to an empty cell.
                None => row.push(0),
            }
        }
        for _ in 0..run {
            row.push(0);
        }
        rows.push(row);
    }

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if width == 0 {
        return Err(ChessErrors::EmptyPositionDescriptor);
    }
    for row in rows.iter_mut() {
        row.resize(width, 0);
    }

    let side_to_move = match fields.next() {
        Some("b") => PieceTeam::Black,
        _ => PieceTeam::White,
    };

    Ok(ParsedPosition { rows, side_to_move })
}
