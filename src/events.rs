//! Push-based event stream from the controller to its UI.

use crate::games::tictactoe::{Player, RoundOutcome, SeriesOutcome};
use crate::score::SeriesScore;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Notifications emitted by the turn controller.
///
/// Within one transition events arrive in this order: `MoveApplied`,
/// `RoundOutcome`, `ScoreUpdated`, `SeriesOutcome`. A UI that shows a
/// finale should let `SeriesOutcome` take precedence over the round result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh, empty round began.
    RoundStarted,
    /// A mark was placed.
    MoveApplied {
        /// Board index (0-8).
        index: usize,
        /// Who placed it.
        player: Player,
    },
    /// The round ended.
    RoundOutcome {
        /// How it ended.
        outcome: RoundOutcome,
    },
    /// A tally changed after a won round.
    ScoreUpdated {
        /// The score after the change.
        score: SeriesScore,
    },
    /// The series was clinched.
    SeriesOutcome {
        /// Which series result.
        outcome: SeriesOutcome,
    },
    /// The score was zeroed by a full reset.
    SeriesReset,
}

/// Fan-out of events to every live subscriber.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
        rx
    }

    /// Sends `event` to every subscriber, dropping those whose receiver is gone.
    pub fn emit(&mut self, event: GameEvent) {
        trace!(?event, "Emitting event");
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
