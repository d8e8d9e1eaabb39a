//! Turn phases and round/series outcomes.

use super::rules::WinLine;
use super::Player;
use serde::{Deserialize, Serialize};

/// Where the controller is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TurnPhase {
    /// The human may submit a move.
    WaitingForHuman,
    /// The human has moved; the computer's reply is pending.
    ComputerThinking,
    /// The round ended. Only a new round can leave this phase.
    RoundOver,
}

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The human completed `WinLine`.
    HumanWin(WinLine),
    /// The computer completed `WinLine`.
    ComputerWin(WinLine),
    /// Board full, nobody won.
    Draw,
}

impl RoundOutcome {
    /// Builds the outcome for `player` completing `line`.
    pub fn won_by(player: Player, line: WinLine) -> Self {
        match player {
            Player::Human => RoundOutcome::HumanWin(line),
            Player::Computer => RoundOutcome::ComputerWin(line),
        }
    }

    /// The winning line, for highlighting.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            RoundOutcome::HumanWin(line) | RoundOutcome::ComputerWin(line) => Some(*line),
            RoundOutcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::HumanWin(line) => write!(f, "You win ({})", line),
            RoundOutcome::ComputerWin(line) => write!(f, "Computer wins ({})", line),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result spanning several rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum SeriesOutcome {
    /// The human reached the required number of round wins.
    HumanSeriesWin,
}
