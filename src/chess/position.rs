use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board square. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub row: u8, // 0-7, rank 8 down to rank 1
    pub col: u8, // 0-7, file a to file h
}

/// Unchecked wire form; bounds are enforced on the way in
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = ChessError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, ChessError> {
        if row > 7 {
            return Err(ChessError::InvalidPosition(format!(
                "Row must be 0-7, got {}",
                row
            )));
        }
        if col > 7 {
            return Err(ChessError::InvalidPosition(format!(
                "Column must be 0-7, got {}",
                col
            )));
        }

        Ok(Self { row, col })
    }

    /// Create position without validation (for internal use when bounds are guaranteed)
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Square reached by stepping `dr` rows and `dc` columns, if still on the board
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Position::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Index into a 64-square bitset
    pub fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(index: usize) -> Position {
        Position::new_unchecked((index / 8) as u8, (index % 8) as u8)
    }

    /// Create position from file and rank characters
    pub fn from_chars(file: char, rank: char) -> Result<Self, ChessError> {
        let file_lower = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_lower) {
            return Err(ChessError::InvalidPosition(format!(
                "Invalid file '{}'. Must be a-h.",
                file
            )));
        }

        if !('1'..='8').contains(&rank) {
            return Err(ChessError::InvalidPosition(format!(
                "Invalid rank '{}'. Must be 1-8.",
                rank
            )));
        }

        Ok(Position {
            row: b'8' - rank as u8,
            col: file_lower as u8 - b'a',
        })
    }

    pub fn file_char(&self) -> char {
        (self.col + b'a') as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    /// Get all positions on the board, row by row from row 0
    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |col| Position { row, col }))
    }
}

// Algebraic notation
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_chars(file, rank),
            _ => Err(ChessError::InvalidPosition(format!(
                "Position must be exactly 2 characters (e.g., 'e4'), got '{}'",
                s
            ))),
        }
    }
}
