//! Cell naming for logs and board-edge identifiers.
//!
//! Columns are lettered from the left edge, rows are numbered from the
//! bottom edge, so in the default layout White's home row is row "1".

use crate::board_location::{Cell, Dimension};

/// Name of a cell in the fixed frame, e.g. `(4, 6)` on 8x8 -> `"E2"`.
pub fn cell_name(cell: Cell, dimension: Dimension) -> String {
    let letter = char::from(b'A' + cell.0 as u8);
    let number = dimension.1 - cell.1;
    format!("{letter}{number}")
}

/// Column letters left-to-right for the bottom edge of the board.
pub fn alpha_identifiers(columns: i8) -> Vec<String> {
    (0..columns)
        .map(|c| char::from(b'A' + c as u8).to_string())
        .collect()
}

/// Row numbers top-to-bottom for the side edge of the board.
pub fn number_identifiers(rows: i8) -> Vec<String> {
    (0..rows).map(|r| (rows - r).to_string()).collect()
}
