//! Turn controller: the alternating-turn state machine for one series.
//!
//! The controller exclusively owns the board, the score and the computer's
//! random source. A UI drives it with commands, reads it with queries, and
//! listens to [`GameEvent`]s for anything that changed.

use crate::events::{EventBus, GameEvent};
use crate::games::tictactoe::{
    Board, InvalidMove, MoveReason, Player, RoundOutcome, TurnPhase, pick_move,
};
use crate::score::SeriesScore;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Result of an accepted human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// The round continues; call [`TurnController::computer_move`] next.
    ComputerToMove,
    /// The human's move ended the round.
    RoundOver(RoundOutcome),
}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    /// Board index the computer marked.
    pub index: usize,
    /// Which heuristic rule chose it.
    pub reason: MoveReason,
    /// Set if the move ended the round.
    pub outcome: Option<RoundOutcome>,
}

/// Human-versus-computer turn controller.
///
/// Starts in [`TurnPhase::WaitingForHuman`] with an active round and a zero
/// score.
#[derive(Debug)]
pub struct TurnController<R = StdRng> {
    board: Board,
    turn: Player,
    active: bool,
    phase: TurnPhase,
    score: SeriesScore,
    rng: R,
    events: EventBus,
}

impl TurnController<StdRng> {
    /// Creates a controller whose computer player is seeded from the OS.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a controller with a deterministic computer player.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TurnController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TurnController<R> {
    /// Creates a controller that draws random moves from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            turn: Player::Human,
            active: true,
            phase: TurnPhase::WaitingForHuman,
            score: SeriesScore::new(),
            rng,
            events: EventBus::new(),
        }
    }

    /// Subscribes to the event stream.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        self.events.subscribe()
    }

    /// Clears the board and hands the first move to the human.
    ///
    /// Valid in any phase; an unfinished round is abandoned without scoring.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) {
        self.board.reset();
        self.turn = Player::Human;
        self.active = true;
        self.phase = TurnPhase::WaitingForHuman;
        info!(score = %self.score, "Round started");
        self.events.emit(GameEvent::RoundStarted);
    }

    /// Zeroes the score and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_series(&mut self) {
        self.score.reset();
        info!("Series reset");
        self.events.emit(GameEvent::SeriesReset);
        self.start_round();
    }

    /// Applies the human's move at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing anything if the round is over, the
    /// computer is to move, or the square is out of range or occupied.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<Accepted, InvalidMove> {
        if !self.active {
            warn!("Human move rejected: round inactive");
            return Err(InvalidMove::RoundInactive);
        }
        if self.phase != TurnPhase::WaitingForHuman {
            warn!("Human move rejected: computer to move");
            return Err(InvalidMove::NotHumansTurn);
        }

        self.board.place(index, Player::Human).inspect_err(|e| {
            warn!(error = %e, "Human move rejected");
        })?;
        self.events.emit(GameEvent::MoveApplied {
            index,
            player: Player::Human,
        });

        if let Some(outcome) = self.detect_outcome() {
            return Ok(Accepted::RoundOver(outcome));
        }

        self.turn = Player::Computer;
        self.phase = TurnPhase::ComputerThinking;
        debug!("Computer to move");
        Ok(Accepted::ComputerToMove)
    }

    /// Plays the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::RoundInactive`] after the round ended and
    /// [`InvalidMove::NotComputersTurn`] while the human is to move.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn computer_move(&mut self) -> Result<ComputerMove, InvalidMove> {
        if !self.active {
            return Err(InvalidMove::RoundInactive);
        }
        if self.phase != TurnPhase::ComputerThinking {
            return Err(InvalidMove::NotComputersTurn);
        }

        // A full board always ends the round first, so a pick exists here.
        let (index, reason) =
            pick_move(&self.board, &mut self.rng).ok_or(InvalidMove::RoundInactive)?;
        self.board.place(index, Player::Computer)?;
        debug!(index, %reason, "Computer moved");
        self.events.emit(GameEvent::MoveApplied {
            index,
            player: Player::Computer,
        });

        let outcome = self.detect_outcome();
        if outcome.is_none() {
            self.turn = Player::Human;
            self.phase = TurnPhase::WaitingForHuman;
        }

        Ok(ComputerMove {
            index,
            reason,
            outcome,
        })
    }

    /// Ends the round if the last placement won or filled the board.
    fn detect_outcome(&mut self) -> Option<RoundOutcome> {
        let outcome = match self.board.winner() {
            Some((player, line)) => RoundOutcome::won_by(player, line),
            None if self.board.is_full() => RoundOutcome::Draw,
            None => return None,
        };

        self.active = false;
        self.phase = TurnPhase::RoundOver;
        info!(%outcome, "Round over");
        self.events.emit(GameEvent::RoundOutcome { outcome });

        let series = self.score.record(&outcome);
        if !outcome.is_draw() {
            self.events.emit(GameEvent::ScoreUpdated { score: self.score });
        }
        if let Some(outcome) = series {
            self.events.emit(GameEvent::SeriesOutcome { outcome });
        }

        Some(outcome)
    }

    /// Current series score.
    pub fn current_score(&self) -> SeriesScore {
        self.score
    }

    /// Snapshot of the board.
    pub fn current_board(&self) -> Board {
        self.board.clone()
    }

    /// Current phase of the turn state machine.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whose turn it is. Meaningless once the round is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Whether the round accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = TurnController::seeded(1);
        assert_eq!(controller.phase(), TurnPhase::WaitingForHuman);
        assert_eq!(controller.turn(), Player::Human);
        assert!(controller.is_active());
        assert_eq!(controller.current_board(), Board::new());
        assert_eq!(controller.current_score(), SeriesScore::new());
    }

    #[test]
    fn test_reentrant_human_move_rejected() {
        let mut controller = TurnController::seeded(1);
        assert_eq!(controller.submit_human_move(0), Ok(Accepted::ComputerToMove));
        let before = controller.current_board();

        assert_eq!(controller.submit_human_move(1), Err(InvalidMove::NotHumansTurn));
        assert_eq!(controller.current_board(), before);
        assert_eq!(controller.phase(), TurnPhase::ComputerThinking);
    }

    #[test]
    fn test_computer_move_requires_its_turn() {
        let mut controller = TurnController::seeded(1);
        assert_eq!(controller.computer_move(), Err(InvalidMove::NotComputersTurn));
    }

    #[test]
    fn test_computer_reply_returns_turn() {
        let mut controller = TurnController::seeded(3);
        controller.submit_human_move(4).unwrap();
        let reply = controller.computer_move().unwrap();

        assert_eq!(reply.reason, MoveReason::Random);
        assert_ne!(reply.index, 4);
        assert_eq!(reply.outcome, None);
        assert_eq!(controller.phase(), TurnPhase::WaitingForHuman);
        assert_eq!(controller.current_board().marked_count(), 2);
    }

    #[test]
    fn test_out_of_range_rejected_without_state_change() {
        let mut controller = TurnController::seeded(1);
        assert_eq!(controller.submit_human_move(9), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(controller.phase(), TurnPhase::WaitingForHuman);
        assert_eq!(controller.current_board(), Board::new());
    }
}
