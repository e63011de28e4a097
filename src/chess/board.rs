use super::{ChessError, Color, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// The board carries no turn or castling state; those live in the game
/// state that owns it. Accessors panic on out-of-range squares: callers
/// that accept untrusted coordinates validate them with [`Position::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a new board with the standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();

        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board.squares[Color::Black.home_row() as usize][col] =
                Some(Piece::new(piece_type, Color::Black));
            board.squares[Color::White.home_row() as usize][col] =
                Some(Piece::new(piece_type, Color::White));
        }

        for col in 0..8 {
            board.squares[Color::Black.pawn_row() as usize][col] =
                Some(Piece::new(PieceType::Pawn, Color::Black));
            board.squares[Color::White.pawn_row() as usize][col] =
                Some(Piece::new(PieceType::Pawn, Color::White));
        }

        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece at the specified position, if any
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        assert!(pos.is_on_board(), "square {:?} is out of bounds", pos);
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Set (or clear) the piece at the specified position
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        assert!(pos.is_on_board(), "square {:?} is out of bounds", pos);
        self.squares[pos.row as usize][pos.col as usize] = piece;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_piece(pos).is_none()
    }

    /// Locate the king of `color`
    pub fn find_king(&self, color: Color) -> Option<Position> {
        Position::all_positions().find(|&pos| {
            self.get_piece(pos) == Some(Piece::new(PieceType::King, color))
        })
    }

    /// All pieces of `color` with their squares
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all_positions().filter_map(move |pos| match self.get_piece(pos) {
            Some(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }

    /// Parse the piece-placement field of a FEN string
    /// Example: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    pub fn from_placement(placement: &str) -> Result<Board, ChessError> {
        let placement = placement.trim();
        if placement.is_empty() {
            return Err(ChessError::InvalidPlacement(
                "Placement string cannot be empty".to_string(),
            ));
        }

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            let found_rows = rows.len();
            return Err(ChessError::InvalidPlacement(format!(
                "Placement must have exactly 8 ranks separated by '/', found {found_rows}"
            )));
        }

        let mut board = Board::empty();

        // FEN lists rank 8 first, which is row 0
        for (row, row_str) in rows.iter().enumerate() {
            let rank_number = 8 - row;
            let mut col = 0;

            for c in row_str.chars() {
                if col >= 8 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "Rank {rank_number} has more than 8 squares (found '{c}')"
                    )));
                }

                if let Some(empty_squares) = c.to_digit(10) {
                    let empty_squares = empty_squares as usize;
                    if empty_squares == 0 || col + empty_squares > 8 {
                        return Err(ChessError::InvalidPlacement(format!(
                            "Empty square count '{c}' in rank {rank_number} would exceed 8 squares"
                        )));
                    }
                    col += empty_squares;
                } else {
                    let piece = Piece::from_fen_char(c).map_err(|_| {
                        ChessError::InvalidPlacement(format!(
                            "Invalid piece character '{c}' in rank {rank_number} (valid pieces: KQRBNPkqrbnp)"
                        ))
                    })?;
                    board.squares[row][col] = Some(piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "Rank {rank_number} must represent exactly 8 squares, found {col}"
                )));
            }
        }

        Ok(board)
    }

    /// Piece-placement field of FEN notation
    pub fn to_placement(&self) -> String {
        let mut rows = Vec::with_capacity(8);

        for row in &self.squares {
            let mut row_string = String::new();
            let mut empty_count = 0;

            for square in row {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            row_string.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        row_string.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                row_string.push_str(&empty_count.to_string());
            }

            rows.push(row_string);
        }

        rows.join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard chess starting arrangement
pub fn initialize_board() -> Board {
    Board::new()
}
