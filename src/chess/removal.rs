use super::{Board, ChessError, Position};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Squares permanently deleted from the board.
///
/// Append-only: there is no way to restore a removed square. Movement rules
/// treat a removed square as a wall that blocks rays and can never be
/// entered or captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RemovalLedger {
    bits: u64,
}

impl RemovalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_removed(&self, pos: Position) -> bool {
        (self.bits >> pos.index()) & 1 == 1
    }

    /// Delete `pos` from the board. Fails if the square holds a piece or is already gone.
    pub fn remove(&mut self, pos: Position, board: &Board) -> Result<(), ChessError> {
        if self.is_removed(pos) {
            return Err(ChessError::InvalidRemoval(format!(
                "Square {pos} has already been removed"
            )));
        }
        if let Some(piece) = board.get_piece(pos) {
            return Err(ChessError::InvalidRemoval(format!(
                "Square {pos} is occupied by {} {:?}",
                piece.color, piece.piece_type
            )));
        }

        self.bits |= 1u64 << pos.index();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Removed squares in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..64)
            .filter(move |&i| (self.bits >> i) & 1 == 1)
            .map(Position::from_index)
    }
}

// Stored as a list of squares so saved games stay readable
impl Serialize for RemovalLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let squares: Vec<String> = self.iter().map(|pos| pos.to_string()).collect();
        squares.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RemovalLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let squares = Vec::<String>::deserialize(deserializer)?;
        let mut ledger = RemovalLedger::new();
        for square in squares {
            let pos = square
                .parse::<Position>()
                .map_err(serde::de::Error::custom)?;
            ledger.bits |= 1u64 << pos.index();
        }
        Ok(ledger)
    }
}
