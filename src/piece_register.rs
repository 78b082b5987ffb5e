//! Piece ownership, split by team, plus the per-team casualty lists.
//!
//! The register is the single source of truth for where pieces stand; the
//! board grid is recomputed from it. Casualties are retained after removal
//! for statistics and for crazyhouse re-placement by the team that felled
//! them.

use crate::board_location::Cell;
use crate::chess_errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_team::PieceTeam;

#[derive(Clone, Debug, Default)]
pub struct PieceRegister {
    pub white_pieces: Vec<Piece>,
    pub black_pieces: Vec<Piece>,
    pub white_casualties: Vec<Piece>,
    pub black_casualties: Vec<Piece>,
}

impl PieceRegister {
    pub fn new() -> Self {
        PieceRegister::default()
    }

    pub fn pieces(&self, team: PieceTeam) -> &[Piece] {
        match team {
            PieceTeam::White => &self.white_pieces,
            PieceTeam::Black => &self.black_pieces,
        }
    }

    pub fn casualties(&self, team: PieceTeam) -> &[Piece] {
        match team {
            PieceTeam::White => &self.white_casualties,
            PieceTeam::Black => &self.black_casualties,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.all_pieces().find(|p| p.cell == cell)
    }

    pub fn piece_at_mut(&mut self, cell: Cell) -> Option<&mut Piece> {
        self.white_pieces
            .iter_mut()
            .chain(self.black_pieces.iter_mut())
            .find(|p| p.cell == cell)
    }

    pub fn add_piece(&mut self, piece: Piece) {
        match piece.team {
            PieceTeam::White => self.white_pieces.push(piece),
            PieceTeam::Black => self.black_pieces.push(piece),
        }
    }

    /// Removes the piece standing on `cell` from play, if any.
    pub fn remove_at(&mut self, cell: Cell) -> Option<Piece> {
        if let Some(i) = self.white_pieces.iter().position(|p| p.cell == cell) {
            return Some(self.white_pieces.remove(i));
        }
        if let Some(i) = self.black_pieces.iter().position(|p| p.cell == cell) {
            return Some(self.black_pieces.remove(i));
        }
        None
    }

    /// Files a removed piece in its team's casualty list.
    pub fn bury(&mut self, piece: Piece) {
        match piece.team {
            PieceTeam::White => self.white_casualties.push(piece),
            PieceTeam::Black => self.black_casualties.push(piece),
        }
    }

    pub fn king_cell(&self, team: PieceTeam) -> Option<Cell> {
        self.pieces(team)
            .iter()
            .find(|p| p.class == PieceClass::King)
            .map(|p| p.cell)
    }

    pub fn king_count(&self, team: PieceTeam) -> usize {
        self.pieces(team)
            .iter()
            .filter(|p| p.class == PieceClass::King)
            .count()
    }

    pub fn alive_count(&self) -> usize {
        self.white_pieces.len() + self.black_pieces.len()
    }

    /// Takes one spent casualty of `class` out of `team`'s casualty list, for
    /// crazyhouse placement by the opponent.
    pub fn spend_casualty(
        &mut self,
        team: PieceTeam,
        class: PieceClass,
    ) -> Result<Piece, ChessErrors> {
        let list = match team {
            PieceTeam::White => &mut self.white_casualties,
            PieceTeam::Black => &mut self.black_casualties,
        };
        match list.iter().position(|p| p.class == class) {
            Some(i) => Ok(list.remove(i)),
            None => Err(ChessErrors::CasualtyPoolEmpty(class)),
        }
    }
}
