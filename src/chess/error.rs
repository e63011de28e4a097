use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid piece type: {0}")]
    InvalidPieceType(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Invalid removal: {0}")]
    InvalidRemoval(String),

    #[error("Game is over")]
    GameOver,
}
