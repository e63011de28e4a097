pub mod clock;
pub mod controller;
pub mod state;

pub use clock::TurnClock;
pub use controller::{ActionMode, ActionResult, GameConfig, GameController, GameEvent};
pub use state::{GameOutcome, GameState, HistoryEntry};
