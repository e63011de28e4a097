use super::controller::GameEvent;
use crate::chess::Color;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Per-turn countdown.
///
/// Runs independently of the board: when a turn's time runs out it sends
/// [`GameEvent::Timeout`] into the channel, and the receiver decides what to
/// do with it. Starting a new turn cancels the previous countdown.
#[derive(Debug)]
pub struct TurnClock {
    limit: Duration,
    events: mpsc::UnboundedSender<GameEvent>,
    deadline: Option<Instant>,
    handle: Option<JoinHandle<()>>,
}

impl TurnClock {
    pub fn new(limit: Duration, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            limit,
            events,
            deadline: None,
            handle: None,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Begin counting down the turn of `player` that starts at `ply`.
    /// Must be called from within a tokio runtime.
    pub fn start_turn(&mut self, player: Color, ply: u32) {
        self.stop();

        let deadline = Instant::now() + self.limit;
        let events = self.events.clone();
        debug!(%player, ply, limit_secs = self.limit.as_secs_f64(), "Turn clock started");

        self.deadline = Some(deadline);
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            debug!(%player, ply, "Turn clock expired");
            // Receiver gone means the session is over
            let _ = events.send(GameEvent::Timeout { player, ply });
        }));
    }

    /// Cancel the running countdown, if any
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left in the current turn; None when stopped
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Drop for TurnClock {
    fn drop(&mut self) {
        self.stop();
    }
}
