//! Helpers for setting up positions in tests

use voidmate::chess::{Board, Position, RemovalLedger};

/// Parse an algebraic square such as "e4"
pub fn sq(square: &str) -> Position {
    square.parse().expect("test square should be valid")
}

/// Board from a FEN piece-placement field
pub fn board(placement: &str) -> Board {
    Board::from_placement(placement).expect("test placement should be valid")
}

/// Ledger with the given squares removed from `board`
pub fn ledger(board: &Board, squares: &[&str]) -> RemovalLedger {
    let mut removed = RemovalLedger::new();
    for square in squares {
        removed
            .remove(sq(square), board)
            .expect("test removal should be valid");
    }
    removed
}

/// Sort squares so destination sets compare independent of generation order
pub fn sorted(mut squares: Vec<Position>) -> Vec<Position> {
    squares.sort();
    squares
}

/// Squares parsed and sorted
pub fn squares(list: &[&str]) -> Vec<Position> {
    sorted(list.iter().map(|s| sq(s)).collect())
}
