//! Turns pseudo-legal moves into legal ones by playing each on a copy of the
//! board and rejecting any that leaves the mover's king attacked. Pins and
//! discovered checks need no special handling: the simulation covers them.

use super::castling::{CastlingRights, CastlingSide};
use super::check::is_in_check;
use super::movegen::pseudo_legal_destinations;
use super::moves::{Move, MoveOutcome};
use super::{Board, ChessError, Color, PieceType, Position, RemovalLedger};

/// Apply `from -> to` to a copy of `board`.
///
/// Does not check legality. A king moving two columns from its home square
/// is a castle and relocates the matching rook in the same step.
pub fn make_move(board: &Board, from: Position, to: Position) -> Result<MoveOutcome, ChessError> {
    let piece = board
        .get_piece(from)
        .ok_or_else(|| ChessError::IllegalMove(format!("No piece at source position {from}")))?;

    let mut next = board.clone();
    let captured = next.get_piece(to);
    next.set_piece(from, None);
    next.set_piece(to, Some(piece));

    let castle_side = if piece.piece_type == PieceType::King {
        CastlingSide::from_king_move(piece.color, from, to)
    } else {
        None
    };

    if let Some(side) = castle_side {
        let rook_from = side.rook_from(piece.color);
        let rook = next.get_piece(rook_from).ok_or_else(|| {
            ChessError::IllegalMove(format!("No rook found at {rook_from} for castling"))
        })?;
        next.set_piece(rook_from, None);
        next.set_piece(side.rook_to(piece.color), Some(rook));
    }

    Ok(MoveOutcome {
        board: next,
        is_castling: castle_side.is_some(),
        captured,
    })
}

/// True iff `from -> to` is a legal move for the piece on `from`.
pub fn is_valid_move(
    board: &Board,
    from: Position,
    to: Position,
    removed: &RemovalLedger,
    castling: &CastlingRights,
) -> bool {
    let Some(piece) = board.get_piece(from) else {
        return false;
    };

    if !pseudo_legal_destinations(board, removed, castling, from).contains(&to) {
        return false;
    }

    leaves_king_safe(board, piece.color, from, to, removed)
}

fn leaves_king_safe(
    board: &Board,
    color: Color,
    from: Position,
    to: Position,
    removed: &RemovalLedger,
) -> bool {
    // Kings are never captured
    if matches!(board.get_piece(to), Some(target) if target.is_king()) {
        return false;
    }

    match make_move(board, from, to) {
        Ok(outcome) => !is_in_check(&outcome.board, color, removed),
        Err(_) => false,
    }
}

/// Legal destinations for the piece on `from`
pub fn legal_destinations(
    board: &Board,
    from: Position,
    removed: &RemovalLedger,
    castling: &CastlingRights,
) -> Vec<Position> {
    let Some(piece) = board.get_piece(from) else {
        return Vec::new();
    };

    pseudo_legal_destinations(board, removed, castling, from)
        .into_iter()
        .filter(|&to| leaves_king_safe(board, piece.color, from, to, removed))
        .collect()
}

/// Every legal move available to `color`
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    removed: &RemovalLedger,
    castling: &CastlingRights,
) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            legal_destinations(board, from, removed, castling)
                .into_iter()
                .map(move |to| Move::new_unchecked(from, to))
        })
        .collect()
}

/// True iff `color` has at least one legal move
pub fn has_legal_move(
    board: &Board,
    color: Color,
    removed: &RemovalLedger,
    castling: &CastlingRights,
) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_destinations(board, from, removed, castling).is_empty())
}
