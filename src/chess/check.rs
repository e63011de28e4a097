use super::movegen::attacked_squares;
use super::{Board, Color, Position, RemovalLedger};

/// True iff any piece of `by_color` attacks `target`.
///
/// Recomputed from scratch on every call.
pub fn is_square_attacked(
    board: &Board,
    removed: &RemovalLedger,
    target: Position,
    by_color: Color,
) -> bool {
    board
        .pieces(by_color)
        .any(|(from, _)| attacked_squares(board, removed, from).contains(&target))
}

/// True iff the king of `color` is attacked by the opponent.
///
/// A board with no king of `color` is never in check.
pub fn is_in_check(board: &Board, color: Color, removed: &RemovalLedger) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, removed, king, color.opposite()),
        None => false,
    }
}
