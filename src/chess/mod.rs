// Re-export all public items
pub use self::board::{initialize_board, Board};
pub use self::castling::{CastlingRights, CastlingSide};
pub use self::check::{is_in_check, is_square_attacked};
pub use self::checkmate::is_checkmate;
pub use self::error::ChessError;
pub use self::legality::{
    all_legal_moves, has_legal_move, is_valid_move, legal_destinations, make_move,
};
pub use self::movegen::{attacked_squares, pseudo_legal_destinations};
pub use self::moves::{Move, MoveOutcome};
pub use self::piece::{Color, Piece, PieceType};
pub use self::position::Position;
pub use self::removal::RemovalLedger;

// Define submodules
mod board;
mod castling;
mod check;
mod checkmate;
mod error;
mod legality;
mod movegen;
mod moves;
mod piece;
mod position;
mod removal;
