pub mod analyze;
pub mod app;
pub mod commands;
pub mod display;
pub mod input;
pub mod savegame;
pub mod session;

pub use analyze::{analyze_position, AnalysisReport};
pub use app::{App, BoardStyle, Config, PlayOptions};
pub use commands::{Cli, Commands, ConfigCommand};
pub use display::{render_board, render_history, render_status};
pub use input::{parse_command, Command, InputError};
pub use savegame::{load_game, save_game};
pub use session::{Reply, Session};
