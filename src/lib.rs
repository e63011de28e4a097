pub mod chess;
pub mod cli;
pub mod game;

// Re-export key types for easy testing
pub use chess::{Board, ChessError, Color, Piece, PieceType, Position, RemovalLedger};
pub use game::{GameController, GameState};
