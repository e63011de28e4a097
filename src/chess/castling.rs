use super::{Board, ChessError, Color, Piece, PieceType, Position};
use serde::{Deserialize, Serialize};

const KING_COL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    fn rook_col(&self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// Home square of the king that castles
    pub fn king_from(&self, color: Color) -> Position {
        Position::new_unchecked(color.home_row(), KING_COL)
    }

    pub fn king_to(&self, color: Color) -> Position {
        let col = match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        };
        Position::new_unchecked(color.home_row(), col)
    }

    pub fn rook_from(&self, color: Color) -> Position {
        Position::new_unchecked(color.home_row(), self.rook_col())
    }

    pub fn rook_to(&self, color: Color) -> Position {
        let col = match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        };
        Position::new_unchecked(color.home_row(), col)
    }

    /// Squares strictly between king and rook; all must be empty and present
    pub fn between(&self, color: Color) -> Vec<Position> {
        let row = color.home_row();
        let cols = match self {
            CastlingSide::KingSide => 5..=6,
            CastlingSide::QueenSide => 1..=3,
        };
        cols.map(|col| Position::new_unchecked(row, col)).collect()
    }

    /// Squares the king stands on or crosses; none may be attacked
    pub fn king_path(&self, color: Color) -> [Position; 3] {
        let from = self.king_from(color);
        let to = self.king_to(color);
        let mid = Position::new_unchecked(from.row, (from.col + to.col) / 2);
        [from, mid, to]
    }

    /// Side a king move from `from` to `to` castles toward, if it is a castle
    pub fn from_king_move(color: Color, from: Position, to: Position) -> Option<CastlingSide> {
        CastlingSide::ALL
            .into_iter()
            .find(|side| side.king_from(color) == from && side.king_to(color) == to)
    }

    /// Side whose rook starts on `pos`, with the rook's color
    pub fn from_rook_square(pos: Position) -> Option<(Color, CastlingSide)> {
        [Color::White, Color::Black].into_iter().find_map(|color| {
            CastlingSide::ALL
                .into_iter()
                .find(|side| side.rook_from(color) == pos)
                .map(|side| (color, side))
        })
    }
}

/// Castling rights for both players.
///
/// Each right moves only from available to revoked. Whether a king has moved
/// is derived from the rights rather than tracked on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingRights {
    /// Create new castling rights with all castling available
    pub fn new() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Create castling rights from FEN notation (e.g., "KQkq", "Kq", "-")
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let mut rights = Self::none();
        if fen == "-" {
            return Ok(rights);
        }

        for c in fen.chars() {
            match c {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => {
                    return Err(ChessError::InvalidPlacement(format!(
                        "Invalid castling rights character '{c}' (valid: K, Q, k, q, or - for none)"
                    )))
                }
            }
        }

        Ok(rights)
    }

    pub fn to_fen(&self) -> String {
        let mut result = String::new();
        if self.white_kingside {
            result.push('K');
        }
        if self.white_queenside {
            result.push('Q');
        }
        if self.black_kingside {
            result.push('k');
        }
        if self.black_queenside {
            result.push('q');
        }

        if result.is_empty() {
            "-".to_string()
        } else {
            result
        }
    }

    pub fn is_available(&self, color: Color, side: CastlingSide) -> bool {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => self.white_kingside,
            (Color::White, CastlingSide::QueenSide) => self.white_queenside,
            (Color::Black, CastlingSide::KingSide) => self.black_kingside,
            (Color::Black, CastlingSide::QueenSide) => self.black_queenside,
        }
    }

    /// True once neither side can castle any more for `color`
    pub fn has_king_moved(&self, color: Color) -> bool {
        CastlingSide::ALL
            .iter()
            .all(|&side| !self.is_available(color, side))
    }

    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => self.white_kingside = false,
            (Color::White, CastlingSide::QueenSide) => self.white_queenside = false,
            (Color::Black, CastlingSide::KingSide) => self.black_kingside = false,
            (Color::Black, CastlingSide::QueenSide) => self.black_queenside = false,
        }
    }

    /// Remove castling rights for a color (when king moves)
    pub fn revoke_all_for_color(&mut self, color: Color) {
        for side in CastlingSide::ALL {
            self.revoke(color, side);
        }
    }

    /// Remove the right tied to a corner square (rook moved off it or was captured on it)
    pub fn revoke_rook_square(&mut self, pos: Position) {
        if let Some((color, side)) = CastlingSide::from_rook_square(pos) {
            self.revoke(color, side);
        }
    }

    /// Rights after `from -> to` is played on `board` (the position before the move)
    pub fn updated(&self, board: &Board, from: Position, to: Position) -> CastlingRights {
        let mut rights = *self;

        if let Some(piece) = board.get_piece(from) {
            match piece.piece_type {
                PieceType::King => rights.revoke_all_for_color(piece.color),
                PieceType::Rook => rights.revoke_rook_square(from),
                _ => {}
            }
        }

        if let Some(Piece {
            piece_type: PieceType::Rook,
            ..
        }) = board.get_piece(to)
        {
            rights.revoke_rook_square(to);
        }

        rights
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::new()
    }
}
