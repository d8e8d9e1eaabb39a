//! Strictly Series - human versus computer tic-tac-toe
//!
//! A pure game-state engine for a best-of series against a simple
//! heuristic opponent.
//!
//! # Architecture
//!
//! - **Games**: board, win lines, rules and the computer's move heuristic
//! - **Controller**: the alternating-turn state machine and score policy
//! - **Events**: push-based notifications for whatever UI sits on top
//! - **Orchestrator**: async driver that runs the computer's deferred reply
//!
//! # Example
//!
//! ```
//! use strictly_series::{Accepted, GameEvent, TurnController};
//!
//! let mut controller = TurnController::seeded(7);
//! let mut events = controller.subscribe();
//!
//! assert_eq!(controller.submit_human_move(4), Ok(Accepted::ComputerToMove));
//! let reply = controller.computer_move().unwrap();
//! assert_ne!(reply.index, 4);
//!
//! assert!(matches!(events.try_recv(), Ok(GameEvent::MoveApplied { index: 4, .. })));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod events;
mod games;
mod orchestrator;
mod score;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Turn control
pub use controller::{Accepted, ComputerMove, TurnController};
pub use orchestrator::Orchestrator;

// Crate-level exports - Events and scoring
pub use events::{EventBus, GameEvent};
pub use score::{SeriesScore, WINS_NEEDED};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, InvalidMove, LINES, MoveReason, Player, Position, RoundOutcome,
    SeriesOutcome, Square, TurnPhase, WinLine, check_winner, completing_square, is_draw, is_full,
    pick_move,
};
