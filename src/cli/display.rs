use crate::chess::{Color, Position};
use crate::cli::app::BoardStyle;
use crate::game::{GameController, GameState, HistoryEntry};
use std::time::Duration;

struct Glyphs {
    empty: char,
    removed: char,
    hint: char,
}

impl Glyphs {
    fn for_style(style: BoardStyle) -> Self {
        match style {
            BoardStyle::Unicode => Glyphs {
                empty: '·',
                removed: '█',
                hint: '•',
            },
            BoardStyle::Ascii => Glyphs {
                empty: '.',
                removed: '#',
                hint: '*',
            },
        }
    }
}

/// Draw the board from White's side (rank 8 at the top).
///
/// Removed squares get their own glyph. When a piece is selected it is
/// marked with `>` and its legal destinations are hinted.
pub fn render_board(state: &GameState, style: BoardStyle) -> String {
    let glyphs = Glyphs::for_style(style);
    let board = state.board();
    let selected = state.selected();
    let hints = selected
        .map(|from| state.legal_destinations(from))
        .unwrap_or_default();

    let (top, bottom, side) = match style {
        BoardStyle::Unicode => ("  ┌─────────────────┐", "  └─────────────────┘", '│'),
        BoardStyle::Ascii => ("  +-----------------+", "  +-----------------+", '|'),
    };

    let mut lines = vec!["    a b c d e f g h".to_string(), top.to_string()];

    for row in 0..8u8 {
        let rank = 8 - row;
        let mut cells = String::new();
        for col in 0..8u8 {
            let pos = Position::new_unchecked(row, col);
            let marker = if selected == Some(pos) { '>' } else { ' ' };
            let symbol = if state.removed().is_removed(pos) {
                glyphs.removed
            } else {
                match board.get_piece(pos) {
                    Some(piece) => match style {
                        BoardStyle::Unicode => piece.unicode_symbol(),
                        BoardStyle::Ascii => piece.to_fen_char(),
                    },
                    None if hints.contains(&pos) => glyphs.hint,
                    None => glyphs.empty,
                }
            };
            cells.push(marker);
            cells.push(symbol);
        }
        lines.push(format!("{} {}{} {} {}", rank, side, cells, side, rank));
    }

    lines.push(bottom.to_string());
    lines.push("    a b c d e f g h".to_string());
    lines.join("\n")
}

fn removals_left(controller: &GameController, color: Color) -> String {
    match controller.removals_remaining(color) {
        Some(left) => left.to_string(),
        None => "unlimited".to_string(),
    }
}

/// Status lines shown under the board
pub fn render_status(controller: &GameController, time_left: Option<Duration>) -> String {
    let state = controller.state();

    if let Some(outcome) = state.outcome() {
        return format!("Game over: {}", outcome);
    }

    let mut lines = vec![
        format!(
            "To move: {} (mode: {})",
            state.current_player(),
            controller.mode()
        ),
        format!(
            "Removals left: White {}, Black {}",
            removals_left(controller, Color::White),
            removals_left(controller, Color::Black)
        ),
    ];
    if let Some(left) = time_left {
        lines.push(format!("Time left: {}s", left.as_secs()));
    }
    if state.is_in_check() {
        lines.push(format!("{} is in check!", state.current_player()));
    }
    lines.join("\n")
}

/// Numbered list of every action played
pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No actions played yet.".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}. {}: {}", i + 1, entry.color(), entry))
        .collect::<Vec<_>>()
        .join("\n")
}
