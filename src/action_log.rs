//! Append-only action history.
//!
//! Each record keeps the acting move's endpoints, the label of what happened,
//! and a snapshot of the board as it stood *before* the action. The
//! snapshots drive repetition detection; the latest record drives en-passant
//! eligibility. Records are never mutated after append.

use std::fmt;

use chrono::{DateTime, Local};

use crate::board_grid::BoardGrid;
use crate::board_location::Cell;
use crate::outcome::ActionKind;
use crate::utils::algebraic::cell_name;

#[derive(Clone, Debug)]
pub struct ActionRecord {
    pub from: Cell,
    pub to: Cell,
    pub kind: ActionKind,
    pub board_before: BoardGrid,
    pub at: DateTime<Local>,
}

#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog::default()
    }

    pub fn add(&mut self, board_before: BoardGrid, from: Cell, to: Cell, kind: ActionKind) {
        self.records.push(ActionRecord {
            from,
            to,
            kind,
            board_before,
            at: Local::now(),
        });
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many logged snapshots equal the given projection.
    pub fn count_snapshot(&self, grid: &BoardGrid) -> usize {
        self.records
            .iter()
            .filter(|r| &r.board_before == grid)
            .count()
    }

    /// One-line description of a record, e.g. `"E2-E4 moves"`.
    pub fn describe(record: &ActionRecord) -> String {
        let dimension = record.board_before.dimension();
        format!(
            "{}-{} {}",
            cell_name(record.from, dimension),
            cell_name(record.to, dimension),
            record.kind
        )
    }
}

impl fmt::Display for ActionLog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for record in &self.records {
            writeln!(
                f,
                "[{}] {}",
                record.at.format("%H:%M:%S"),
                ActionLog::describe(record)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_count_repetitions() {
        let empty = BoardGrid::new((8, 8));
        let mut other = BoardGrid::new((8, 8));
        other.set_code((0, 0), 6);

        let mut log = ActionLog::new();
        log.add(empty.clone(), (0, 0), (0, 1), ActionKind::Moves);
        log.add(other.clone(), (0, 1), (0, 0), ActionKind::Moves);
        log.add(empty.clone(), (0, 0), (0, 1), ActionKind::Moves);

        assert_eq!(log.count_snapshot(&empty), 2);
        assert_eq!(log.count_snapshot(&other), 1);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn records_describe_themselves() {
        let mut log = ActionLog::new();
        log.add(BoardGrid::new((8, 8)), (4, 6), (4, 4), ActionKind::Moves);
        let last = log.last().expect("one record");
        assert_eq!(ActionLog::describe(last), "E2-E4 moves");
    }
}
