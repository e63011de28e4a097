use super::castling::CastlingRights;
use super::check::is_in_check;
use super::legality::has_legal_move;
use super::{Board, Color, RemovalLedger};

/// True if `color` is in check and no piece of `color` has a legal move.
///
/// Stalemate is not a terminal state in this variant: a player with no legal
/// move who is not in check is simply not mated.
pub fn is_checkmate(
    board: &Board,
    color: Color,
    removed: &RemovalLedger,
    castling: &CastlingRights,
) -> bool {
    if !is_in_check(board, color, removed) {
        return false;
    }
    !has_legal_move(board, color, removed, castling)
}
