use crate::chess::{CastlingSide, ChessError, Move, Position};
use crate::game::ActionMode;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// A line typed during an interactive game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { from: Position, to: Position },
    Castle(CastlingSide),
    /// Bare square: select, move or remove depending on the mode
    Tap(Position),
    Select(Position),
    Remove(Position),
    Mode(ActionMode),
    Moves(Position),
    Board,
    History,
    Time,
    Save(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Empty input. Type 'help' for the list of commands")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(String),

    #[error("Unknown mode '{0}' (expected 'move' or 'remove')")]
    InvalidMode(String),

    #[error(transparent)]
    Chess(#[from] ChessError),
}

fn move_regex() -> &'static Regex {
    static MOVE_RE: OnceLock<Regex> = OnceLock::new();
    MOVE_RE.get_or_init(|| {
        Regex::new(r"^(?i)([a-h][1-8])\s*[-x]?\s*([a-h][1-8])$").expect("move pattern is valid")
    })
}

fn square_regex() -> &'static Regex {
    static SQUARE_RE: OnceLock<Regex> = OnceLock::new();
    SQUARE_RE.get_or_init(|| Regex::new(r"^(?i)[a-h][1-8]$").expect("square pattern is valid"))
}

fn square_argument(keyword: &str, argument: Option<&str>) -> Result<Position, InputError> {
    let argument = argument.ok_or_else(|| InputError::MissingArgument(keyword.to_string()))?;
    Ok(argument.parse::<Position>()?)
}

/// Parse one line of interactive input
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(captures) = move_regex().captures(line) {
        let mv = Move::new(
            captures[1].parse::<Position>()?,
            captures[2].parse::<Position>()?,
        )?;
        return Ok(Command::Move {
            from: mv.from,
            to: mv.to,
        });
    }

    if square_regex().is_match(line) {
        return Ok(Command::Tap(line.parse::<Position>()?));
    }

    match line.to_uppercase().as_str() {
        "O-O" | "0-0" => return Ok(Command::Castle(CastlingSide::KingSide)),
        "O-O-O" | "0-0-0" => return Ok(Command::Castle(CastlingSide::QueenSide)),
        _ => {}
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let argument = words.next();

    match keyword.as_str() {
        "select" | "s" => Ok(Command::Select(square_argument(&keyword, argument)?)),
        "remove" | "rm" | "x" => Ok(Command::Remove(square_argument(&keyword, argument)?)),
        "moves" | "m" => Ok(Command::Moves(square_argument(&keyword, argument)?)),
        "mode" => match argument.map(str::to_lowercase).as_deref() {
            Some("move") => Ok(Command::Mode(ActionMode::Move)),
            Some("remove") => Ok(Command::Mode(ActionMode::Remove)),
            Some(other) => Err(InputError::InvalidMode(other.to_string())),
            None => Err(InputError::MissingArgument(keyword.clone())),
        },
        "save" => argument
            .map(|path| Command::Save(PathBuf::from(path)))
            .ok_or_else(|| InputError::MissingArgument(keyword.clone())),
        "board" | "b" => Ok(Command::Board),
        "history" | "h" => Ok(Command::History),
        "time" | "t" => Ok(Command::Time),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(InputError::Unknown(line.to_string())),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  e2e4, e2 e4, e2-e4   move a piece
  O-O, O-O-O           castle kingside / queenside
  e2                   tap a square (select or move in move mode, remove in remove mode)
  select e2            select a piece
  remove d4            permanently remove an empty square (uses your turn)
  mode move|remove     choose what a bare square tap does
  moves e2             list legal destinations of a piece
  board                redraw the board
  history              list the actions played so far
  time                 show time left in this turn
  save FILE            save the game as JSON
  help                 show this text
  quit                 leave the game";
