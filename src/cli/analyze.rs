use crate::chess::{
    all_legal_moves, is_checkmate, is_in_check, Board, CastlingRights, ChessError, Color, Move,
    Position, RemovalLedger,
};
use std::fmt;

/// Check and mobility summary for one side of a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub to_move: Color,
    pub in_check: bool,
    pub checkmate: bool,
    pub legal_moves: Vec<Move>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To move: {}", self.to_move)?;
        writeln!(f, "In check: {}", if self.in_check { "yes" } else { "no" })?;
        writeln!(f, "Checkmate: {}", if self.checkmate { "yes" } else { "no" })?;
        write!(f, "Legal moves ({}):", self.legal_moves.len())?;
        for mv in &self.legal_moves {
            write!(f, " {}", mv)?;
        }
        Ok(())
    }
}

/// Parse a comma separated list of squares into a removal ledger
pub fn parse_removed(list: &str, board: &Board) -> Result<RemovalLedger, ChessError> {
    let mut removed = RemovalLedger::new();
    for square in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        removed.remove(square.parse::<Position>()?, board)?;
    }
    Ok(removed)
}

pub fn analyze_position(
    placement: &str,
    to_move: &str,
    removed: &str,
    castling: &str,
) -> Result<AnalysisReport, ChessError> {
    let board = Board::from_placement(placement)?;
    let to_move = to_move.parse::<Color>()?;
    let removed = parse_removed(removed, &board)?;
    let castling = CastlingRights::from_fen(castling)?;

    Ok(AnalysisReport {
        to_move,
        in_check: is_in_check(&board, to_move, &removed),
        checkmate: is_checkmate(&board, to_move, &removed, &castling),
        legal_moves: all_legal_moves(&board, to_move, &removed, &castling),
    })
}
