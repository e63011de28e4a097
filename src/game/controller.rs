use super::state::{GameOutcome, GameState, HistoryEntry};
use crate::chess::{CastlingSide, ChessError, Color, Position};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Rules configuration supplied by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Square removals allowed per player; None means unlimited
    pub removals_per_player: Option<u32>,
    /// Time each player has for a single turn; None disables the clock
    pub turn_time_limit: Option<Duration>,
}

/// What a tap on the board does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
    #[default]
    Move,
    Remove,
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionMode::Move => write!(f, "move"),
            ActionMode::Remove => write!(f, "remove"),
        }
    }
}

/// Inputs the controller accepts from the shell and the turn clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Move { from: Position, to: Position },
    Castle(CastlingSide),
    Remove(Position),
    /// `player` ran out of time during the turn that began at `ply`
    Timeout { player: Color, ply: u32 },
}

/// What an accepted tap or event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Selected(Position),
    Deselected,
    Applied(HistoryEntry),
    TimedOut(GameOutcome),
    /// A clock signal for a turn that already ended
    Ignored,
}

/// Owns the game state and applies one action at a time.
///
/// Every transition is computed on the current snapshot and swapped in only
/// when it succeeds, so a rejected action leaves the state untouched.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    config: GameConfig,
    mode: ActionMode,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(GameState::new(), config)
    }

    /// Resume from an existing state
    pub fn with_state(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            config,
            mode: ActionMode::Move,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    /// Switch tap mode; any selection is dropped
    pub fn set_mode(&mut self, mode: ActionMode) {
        self.mode = mode;
        self.state = self.state.without_selection();
    }

    pub fn removals_remaining(&self, color: Color) -> Option<u32> {
        self.state
            .removals_remaining(color, self.config.removals_per_player)
    }

    fn commit(&mut self, next: GameState) -> Result<ActionResult, ChessError> {
        let entry = next.history().last().cloned().ok_or_else(|| {
            ChessError::IllegalMove("Action was not recorded in the history".to_string())
        })?;
        info!(ply = next.ply(), "{} played {}", entry.color(), entry);
        if let Some(outcome) = next.outcome() {
            info!("Game over: {}", outcome);
        }
        self.state = next;
        Ok(ActionResult::Applied(entry))
    }

    fn reject(&self, err: ChessError) -> ChessError {
        debug!(player = %self.state.current_player(), "Rejected action: {}", err);
        err
    }

    /// Tap a square in the current mode.
    ///
    /// In move mode the first tap selects one of the mover's pieces; tapping
    /// it again deselects, tapping another own piece reselects, and any other
    /// square is taken as the destination. In remove mode the tap removes the
    /// square.
    pub fn tap(&mut self, pos: Position) -> Result<ActionResult, ChessError> {
        match self.mode {
            ActionMode::Remove => self.remove_square(pos),
            ActionMode::Move => match self.state.selected() {
                Some(selected) if selected == pos => {
                    self.state = self.state.without_selection();
                    Ok(ActionResult::Deselected)
                }
                Some(selected) => {
                    let own_piece = self
                        .state
                        .board()
                        .get_piece(pos)
                        .is_some_and(|piece| piece.color == self.state.current_player());
                    if own_piece {
                        self.select(pos)
                    } else {
                        self.play_move(selected, pos)
                    }
                }
                None => self.select(pos),
            },
        }
    }

    pub fn select(&mut self, pos: Position) -> Result<ActionResult, ChessError> {
        let next = self.state.with_selection(pos).map_err(|e| self.reject(e))?;
        self.state = next;
        Ok(ActionResult::Selected(pos))
    }

    pub fn play_move(&mut self, from: Position, to: Position) -> Result<ActionResult, ChessError> {
        let next = self.state.with_move(from, to).map_err(|e| self.reject(e))?;
        self.commit(next)
    }

    pub fn castle(&mut self, side: CastlingSide) -> Result<ActionResult, ChessError> {
        let next = self.state.with_castle(side).map_err(|e| self.reject(e))?;
        self.commit(next)
    }

    pub fn remove_square(&mut self, pos: Position) -> Result<ActionResult, ChessError> {
        let next = self
            .state
            .with_removal(pos, self.config.removals_per_player)
            .map_err(|e| self.reject(e))?;
        self.commit(next)
    }

    /// Accept a clock expiry for `player` on the turn that began at `ply`.
    ///
    /// The signal is authoritative for the turn it was raised on: the game ends
    /// and no further action is accepted. A signal from a turn that has
    /// already passed is ignored.
    pub fn signal_timeout(&mut self, player: Color, ply: u32) -> Result<ActionResult, ChessError> {
        if ply != self.state.ply() || player != self.state.current_player() {
            warn!(
                %player,
                signal_ply = ply,
                current_ply = self.state.ply(),
                "Ignoring stale timeout signal"
            );
            return Ok(ActionResult::Ignored);
        }

        let next = self.state.with_timeout(player).map_err(|e| self.reject(e))?;
        let outcome = GameOutcome::Timeout {
            winner: player.opposite(),
        };
        info!("Game over: {}", outcome);
        self.state = next;
        Ok(ActionResult::TimedOut(outcome))
    }

    pub fn handle_event(&mut self, event: GameEvent) -> Result<ActionResult, ChessError> {
        match event {
            GameEvent::Move { from, to } => self.play_move(from, to),
            GameEvent::Castle(side) => self.castle(side),
            GameEvent::Remove(pos) => self.remove_square(pos),
            GameEvent::Timeout { player, ply } => self.signal_timeout(player, ply),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
