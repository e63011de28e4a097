use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Opposite color
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this color's king and rooks at the start of the game
    pub fn home_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this color's pawns start on
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(format!(
                "Expected 'white' or 'black', got '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

impl FromStr for PieceType {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "P" | "PAWN" => Ok(PieceType::Pawn),
            "R" | "ROOK" => Ok(PieceType::Rook),
            "N" | "KNIGHT" => Ok(PieceType::Knight),
            "B" | "BISHOP" => Ok(PieceType::Bishop),
            "Q" | "QUEEN" => Ok(PieceType::Queen),
            "K" | "KING" => Ok(PieceType::King),
            _ => Err(ChessError::InvalidPieceType(format!(
                "Expected one of: P, R, N, B, Q, K, got '{}'",
                s
            ))),
        }
    }
}

/// A piece on the board. Pieces are replaced, never mutated, when they move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn to_fen_char(&self) -> char {
        let base_char = match self.piece_type {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };

        match self.color {
            Color::White => base_char,
            Color::Black => base_char.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Result<Self, ChessError> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = c.to_string().parse::<PieceType>().map_err(|_| {
            ChessError::InvalidPieceType(format!(
                "Invalid piece character '{c}' (valid pieces: KQRBNPkqrbnp)"
            ))
        })?;
        Ok(Piece::new(piece_type, color))
    }

    /// Unicode chess glyph
    pub fn unicode_symbol(&self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
