use crate::board_location::Dimension;
use crate::piece_class::PieceClass;
use crate::piece_record::Piece;
use crate::piece_team::PieceTeam;

/// The rank a pawn of this team promotes on, in the fixed frame.
pub fn far_rank(team: PieceTeam, dimension: Dimension) -> i8 {
    match team {
        PieceTeam::White => 0,
        PieceTeam::Black => dimension.1 - 1,
    }
}

pub fn promotion_eligible(piece: &Piece, dimension: Dimension) -> bool {
    piece.class == PieceClass::Pawn && piece.cell.1 == far_rank(piece.team, dimension)
}
