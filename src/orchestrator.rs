//! Async driver that runs the computer's deferred reply.

use crate::config::GameConfig;
use crate::controller::{Accepted, TurnController};
use crate::games::tictactoe::{InvalidMove, RoundOutcome};
use rand::Rng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, instrument};

/// Owns a [`TurnController`] and plays the computer's reply after a
/// "thinking" pause.
///
/// The pause is the only suspension point. Because the orchestrator is
/// borrowed mutably for the whole exchange, a second human move cannot
/// arrive until the computer has answered.
#[derive(Debug)]
pub struct Orchestrator<R = StdRng> {
    controller: TurnController<R>,
    think_delay: Duration,
}

impl Orchestrator<StdRng> {
    /// Builds an orchestrator from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let controller = match config.seed() {
            Some(seed) => TurnController::seeded(*seed),
            None => TurnController::new(),
        };
        Self::new(controller, config.think_delay())
    }
}

impl<R: Rng> Orchestrator<R> {
    /// Wraps an existing controller.
    pub fn new(controller: TurnController<R>, think_delay: Duration) -> Self {
        Self {
            controller,
            think_delay,
        }
    }

    /// Plays the human's move, then the computer's reply if the round goes on.
    ///
    /// Returns the round outcome if either move ended the round.
    ///
    /// # Errors
    ///
    /// Returns the controller's rejection if the human move is invalid.
    #[instrument(skip(self))]
    pub async fn play_human_move(
        &mut self,
        index: usize,
    ) -> Result<Option<RoundOutcome>, InvalidMove> {
        match self.controller.submit_human_move(index)? {
            Accepted::RoundOver(outcome) => Ok(Some(outcome)),
            Accepted::ComputerToMove => {
                debug!(delay_ms = self.think_delay.as_millis() as u64, "Computer thinking");
                tokio::time::sleep(self.think_delay).await;
                let reply = self.controller.computer_move()?;
                Ok(reply.outcome)
            }
        }
    }

    /// The wrapped controller.
    pub fn controller(&self) -> &TurnController<R> {
        &self.controller
    }

    /// Mutable access for commands such as starting a round.
    pub fn controller_mut(&mut self) -> &mut TurnController<R> {
        &mut self.controller
    }

    /// The computer's thinking pause.
    pub fn think_delay(&self) -> Duration {
        self.think_delay
    }
}
