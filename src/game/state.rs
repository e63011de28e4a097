use crate::chess::{
    is_checkmate, is_in_check, is_valid_move, legal_destinations, make_move, Board,
    CastlingRights, CastlingSide, ChessError, Color, Piece, PieceType, Position, RemovalLedger,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Timeout { winner: Color },
}

impl GameOutcome {
    pub fn winner(&self) -> Color {
        match self {
            GameOutcome::Checkmate { winner } | GameOutcome::Timeout { winner } => *winner,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate, {} wins", winner),
            GameOutcome::Timeout { winner } => {
                write!(f, "{} ran out of time, {} wins", winner.opposite(), winner)
            }
        }
    }
}

/// One applied action, as recorded in the game history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    Move {
        color: Color,
        piece: PieceType,
        from: Position,
        to: Position,
        captured: Option<Piece>,
        castling: bool,
        check: bool,
    },
    Removal {
        color: Color,
        square: Position,
    },
}

impl HistoryEntry {
    pub fn color(&self) -> Color {
        match self {
            HistoryEntry::Move { color, .. } | HistoryEntry::Removal { color, .. } => *color,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Move {
                piece,
                from,
                to,
                captured,
                castling,
                check,
                ..
            } => {
                if *castling {
                    let notation = if to.col > from.col { "O-O" } else { "O-O-O" };
                    write!(f, "{}", notation)?;
                } else {
                    let separator = if captured.is_some() { "x" } else { "-" };
                    if *piece != PieceType::Pawn {
                        write!(f, "{}", piece)?;
                    }
                    write!(f, "{}{}{}", from, separator, to)?;
                }
                if *check {
                    write!(f, "+")?;
                }
                Ok(())
            }
            HistoryEntry::Removal { square, .. } => write!(f, "remove {}", square),
        }
    }
}

/// Full state of one game.
///
/// Transitions never mutate in place: each returns a new, fully consistent
/// state or an error, leaving `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Color,
    selected: Option<Position>,
    removed: RemovalLedger,
    castling: CastlingRights,
    outcome: Option<GameOutcome>,
    removals_used: [u32; 2],
    ply: u32,
    history: Vec<HistoryEntry>,
}

impl GameState {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Self::from_parts(
            Board::new(),
            Color::White,
            RemovalLedger::new(),
            CastlingRights::new(),
        )
    }

    /// Start from an arbitrary position
    pub fn from_parts(
        board: Board,
        current_player: Color,
        removed: RemovalLedger,
        castling: CastlingRights,
    ) -> Self {
        Self {
            board,
            current_player,
            selected: None,
            removed,
            castling,
            outcome: None,
            removals_used: [0, 0],
            ply: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn removed(&self) -> &RemovalLedger {
        &self.removed
    }

    pub fn castling(&self) -> &CastlingRights {
        &self.castling
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Color> {
        self.outcome.map(|outcome| outcome.winner())
    }

    /// Number of actions applied so far
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn removals_used(&self, color: Color) -> u32 {
        self.removals_used[color.index()]
    }

    /// Removals `color` may still make under `limit` (None when unlimited)
    pub fn removals_remaining(&self, color: Color, limit: Option<u32>) -> Option<u32> {
        limit.map(|limit| limit.saturating_sub(self.removals_used(color)))
    }

    /// Whether the player to move is in check
    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.board, self.current_player, &self.removed)
    }

    /// Legal destinations for the piece on `from`
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        legal_destinations(&self.board, from, &self.removed, &self.castling)
    }

    pub fn is_valid_move(&self, from: Position, to: Position) -> bool {
        is_valid_move(&self.board, from, to, &self.removed, &self.castling)
    }

    /// Verify a state built from outside input, such as a saved game.
    ///
    /// Checks that each color has exactly one king, that no removed square
    /// holds a piece and that any selection is one of the mover's pieces.
    pub fn check_consistency(&self) -> Result<(), ChessError> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .board
                .pieces(color)
                .filter(|(_, piece)| piece.is_king())
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidPlacement(format!(
                    "{color} has {kings} kings, expected exactly one"
                )));
            }
        }

        if let Some(square) = self.removed.iter().find(|&pos| !self.board.is_empty(pos)) {
            return Err(ChessError::InvalidPlacement(format!(
                "Removed square {square} holds a piece"
            )));
        }

        if let Some(pos) = self.selected {
            match self.board.get_piece(pos) {
                Some(piece) if piece.color == self.current_player => {}
                _ => {
                    return Err(ChessError::InvalidPlacement(format!(
                        "Selected square {pos} does not hold a {} piece",
                        self.current_player
                    )))
                }
            }
        }

        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        Ok(())
    }

    /// Select a square holding one of the current player's pieces
    pub fn with_selection(&self, pos: Position) -> Result<GameState, ChessError> {
        self.ensure_in_progress()?;

        match self.board.get_piece(pos) {
            Some(piece) if piece.color == self.current_player => {
                let mut next = self.clone();
                next.selected = Some(pos);
                Ok(next)
            }
            Some(piece) => Err(ChessError::IllegalMove(format!(
                "{pos} holds a {} piece, it is {}'s turn",
                piece.color, self.current_player
            ))),
            None => Err(ChessError::IllegalMove(format!("No piece at {pos}"))),
        }
    }

    pub fn without_selection(&self) -> GameState {
        let mut next = self.clone();
        next.selected = None;
        next
    }

    /// Castling rights after `from -> to` is played from this position
    pub fn update_castling_rights(&self, from: Position, to: Position) -> GameState {
        let mut next = self.clone();
        next.castling = self.castling.updated(&self.board, from, to);
        next
    }

    /// Play `from -> to` for the current player.
    ///
    /// After the move the turn passes and the opponent is tested for mate;
    /// a mate ends the game with the mover as winner.
    pub fn with_move(&self, from: Position, to: Position) -> Result<GameState, ChessError> {
        self.ensure_in_progress()?;

        let piece = match self.board.get_piece(from) {
            Some(piece) if piece.color == self.current_player => piece,
            Some(_) => {
                return Err(ChessError::IllegalMove(format!(
                    "Cannot move {}'s piece on {from} during {}'s turn",
                    self.current_player.opposite(),
                    self.current_player
                )))
            }
            None => {
                return Err(ChessError::IllegalMove(format!(
                    "No piece at source position {from}"
                )))
            }
        };

        if !self.is_valid_move(from, to) {
            return Err(ChessError::IllegalMove(format!(
                "{:?} on {from} cannot move to {to}",
                piece.piece_type
            )));
        }

        let outcome = make_move(&self.board, from, to)?;
        let mover = self.current_player;
        let opponent = mover.opposite();

        let mut next = self.update_castling_rights(from, to);
        next.board = outcome.board;
        next.current_player = opponent;
        next.selected = None;
        next.ply += 1;

        let check = is_in_check(&next.board, opponent, &next.removed);
        if check && is_checkmate(&next.board, opponent, &next.removed, &next.castling) {
            next.outcome = Some(GameOutcome::Checkmate { winner: mover });
        }

        next.history.push(HistoryEntry::Move {
            color: mover,
            piece: piece.piece_type,
            from,
            to,
            captured: outcome.captured,
            castling: outcome.is_castling,
            check,
        });

        Ok(next)
    }

    /// Castle toward `side` for the current player
    pub fn with_castle(&self, side: CastlingSide) -> Result<GameState, ChessError> {
        let color = self.current_player;
        self.with_move(side.king_from(color), side.king_to(color))
    }

    /// Permanently remove an empty square and pass the turn.
    ///
    /// Removing is allowed while in check; an opponent already in check who
    /// loses every escape to the removal is mated.
    ///
    /// `limit` caps removals per player; None means unlimited.
    pub fn with_removal(&self, pos: Position, limit: Option<u32>) -> Result<GameState, ChessError> {
        self.ensure_in_progress()?;

        let mover = self.current_player;
        if self.removals_remaining(mover, limit) == Some(0) {
            return Err(ChessError::InvalidRemoval(format!(
                "{mover} has no square removals left"
            )));
        }

        let opponent = mover.opposite();
        let mut next = self.clone();
        next.removed.remove(pos, &self.board)?;
        next.removals_used[mover.index()] += 1;
        next.current_player = opponent;
        next.selected = None;
        next.ply += 1;

        // A removal never gives check, but it can take the last flight square
        // from a king that was left in check
        if is_checkmate(&next.board, opponent, &next.removed, &next.castling) {
            next.outcome = Some(GameOutcome::Checkmate { winner: mover });
        }
        next.history.push(HistoryEntry::Removal {
            color: mover,
            square: pos,
        });

        Ok(next)
    }

    /// End the game because `player` ran out of time
    pub fn with_timeout(&self, player: Color) -> Result<GameState, ChessError> {
        self.ensure_in_progress()?;

        let mut next = self.clone();
        next.selected = None;
        next.outcome = Some(GameOutcome::Timeout {
            winner: player.opposite(),
        });
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
