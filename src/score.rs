//! Series score bookkeeping.

use crate::games::tictactoe::{RoundOutcome, SeriesOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Round wins the human needs to clinch the series.
pub const WINS_NEEDED: u32 = 3;

/// Cumulative round wins within a session.
///
/// Survives round resets; only [`SeriesScore::reset`] zeroes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesScore {
    human_wins: u32,
    computer_wins: u32,
}

impl SeriesScore {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a score with the given tallies.
    pub fn with_wins(human_wins: u32, computer_wins: u32) -> Self {
        Self {
            human_wins,
            computer_wins,
        }
    }

    /// Rounds won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Applies a round outcome.
    ///
    /// Returns the series outcome if this round clinched it. Only human wins
    /// are checked against [`WINS_NEEDED`]; the computer has no series finale.
    #[instrument(skip(self), fields(human = self.human_wins, computer = self.computer_wins))]
    pub fn record(&mut self, outcome: &RoundOutcome) -> Option<SeriesOutcome> {
        match outcome {
            RoundOutcome::HumanWin(_) => {
                self.human_wins += 1;
                if self.human_wins >= WINS_NEEDED {
                    info!(human_wins = self.human_wins, "Human clinched the series");
                    return Some(SeriesOutcome::HumanSeriesWin);
                }
            }
            RoundOutcome::ComputerWin(_) => {
                self.computer_wins += 1;
            }
            RoundOutcome::Draw => {}
        }
        None
    }

    /// Zeroes both tallies.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for SeriesScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You {} - {} Computer", self.human_wins, self.computer_wins)
    }
}
