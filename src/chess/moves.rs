use super::error::ChessError;
use super::piece::Piece;
use super::position::Position;
use super::Board;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a new move with validation
    pub fn new(from: Position, to: Position) -> Result<Self, ChessError> {
        if from == to {
            return Err(ChessError::IllegalMove(
                "Source and destination positions cannot be the same".to_string(),
            ));
        }
        Ok(Self { from, to })
    }

    /// Create a new move without validation (for internal use when validity is guaranteed)
    pub const fn new_unchecked(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Result of applying a move to a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub is_castling: bool,
    pub captured: Option<Piece>,
}
