use crate::cli::app::BoardStyle;
use crate::cli::display::{render_board, render_history, render_status};
use crate::cli::input::{parse_command, Command, InputError, HELP_TEXT};
use crate::cli::savegame::save_game;
use crate::game::{ActionResult, GameController, GameEvent, TurnClock};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    fn quit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: true,
        }
    }
}

/// One interactive game on the terminal.
///
/// Player input and clock expiries arrive on separate sources; both are
/// funneled into the controller one at a time.
pub struct Session {
    controller: GameController,
    style: BoardStyle,
    clock: Option<TurnClock>,
    events: mpsc::UnboundedReceiver<GameEvent>,
}

impl Session {
    pub fn new(controller: GameController, style: BoardStyle) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let clock = controller
            .config()
            .turn_time_limit
            .map(|limit| TurnClock::new(limit, tx));
        Self {
            controller,
            style,
            clock,
            events,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    fn screen(&self) -> String {
        let time_left = self.clock.as_ref().and_then(TurnClock::remaining);
        format!(
            "{}\n{}",
            render_board(self.controller.state(), self.style),
            render_status(&self.controller, time_left)
        )
    }

    /// Restart the countdown for whoever is to move, or stop it once the game is over
    fn restart_clock(&mut self) {
        let state = self.controller.state();
        let (player, ply, over) = (state.current_player(), state.ply(), state.is_game_over());
        if let Some(clock) = self.clock.as_mut() {
            if over {
                clock.stop();
            } else {
                clock.start_turn(player, ply);
            }
        }
    }

    fn after_action(&mut self, result: ActionResult) -> Reply {
        match result {
            ActionResult::Selected(pos) => {
                let hints = self.controller.state().legal_destinations(pos);
                if hints.is_empty() {
                    Reply::text(format!("{}\n{} has no legal moves", self.screen(), pos))
                } else {
                    Reply::text(self.screen())
                }
            }
            ActionResult::Deselected | ActionResult::Ignored => Reply::text(self.screen()),
            ActionResult::Applied(_) | ActionResult::TimedOut(_) => {
                self.restart_clock();
                if self.controller.state().is_game_over() {
                    Reply::quit(format!(
                        "{}\n\n{}",
                        self.screen(),
                        render_history(self.controller.state().history())
                    ))
                } else {
                    Reply::text(self.screen())
                }
            }
        }
    }

    /// Run one parsed command against the game.
    ///
    /// Rejected actions come back as errors and leave the game unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Reply, InputError> {
        let result = match command {
            Command::Move { from, to } => self.controller.play_move(from, to)?,
            Command::Castle(side) => self.controller.castle(side)?,
            Command::Tap(pos) => self.controller.tap(pos)?,
            Command::Select(pos) => self.controller.select(pos)?,
            Command::Remove(pos) => self.controller.remove_square(pos)?,
            Command::Mode(mode) => {
                self.controller.set_mode(mode);
                return Ok(Reply::text(format!("Taps now {} squares", mode)));
            }
            Command::Moves(pos) => {
                let moves = self.controller.state().legal_destinations(pos);
                let list = moves
                    .iter()
                    .map(|to| to.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                return Ok(Reply::text(if list.is_empty() {
                    format!("No legal moves from {}", pos)
                } else {
                    format!("{}: {}", pos, list)
                }));
            }
            Command::Board => return Ok(Reply::text(self.screen())),
            Command::History => {
                return Ok(Reply::text(render_history(
                    self.controller.state().history(),
                )))
            }
            Command::Time => {
                let text = match self.clock.as_ref().and_then(TurnClock::remaining) {
                    Some(left) => format!("{}s left", left.as_secs()),
                    None => "No turn clock in this game".to_string(),
                };
                return Ok(Reply::text(text));
            }
            Command::Save(path) => {
                let text = match save_game(&path, self.controller.state()) {
                    Ok(()) => format!("Game saved to {}", path.display()),
                    Err(e) => format!("Could not save game: {:#}", e),
                };
                return Ok(Reply::text(text));
            }
            Command::Help => return Ok(Reply::text(HELP_TEXT)),
            Command::Quit => return Ok(Reply::quit("Goodbye.")),
        };

        Ok(self.after_action(result))
    }

    /// Parse and run one line of input, turning every problem into a message
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(InputError::Empty) => Reply::text(""),
            Err(e) => Reply::text(format!("✗ {}", e)),
        }
    }

    /// Apply an event from the turn clock
    pub fn handle_event(&mut self, event: GameEvent) -> Reply {
        debug!(?event, "Clock event");
        match self.controller.handle_event(event) {
            Ok(result) => self.after_action(result),
            Err(e) => Reply::text(format!("✗ {}", e)),
        }
    }

    /// Drive the game from stdin until it ends or the players quit
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", self.screen());
        println!("Type 'help' for commands.");
        self.restart_clock();

        loop {
            let reply = tokio::select! {
                line = lines.next_line() => {
                    match line.context("Failed to read input")? {
                        Some(line) => self.handle_line(&line),
                        None => Reply::quit(""),
                    }
                }
                Some(event) = self.events.recv() => self.handle_event(event),
            };

            if !reply.text.is_empty() {
                println!("{}", reply.text);
            }
            if reply.quit {
                break;
            }
        }

        if let Some(clock) = self.clock.as_mut() {
            clock.stop();
        }
        info!(plies = self.controller.state().ply(), "Session ended");
        Ok(())
    }
}
