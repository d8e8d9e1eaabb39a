mod action;
mod computer;
mod phases;
mod position;
mod rules;
mod types;

pub use action::InvalidMove;
pub use computer::{MoveReason, completing_square, pick_move};
pub use phases::{RoundOutcome, SeriesOutcome, TurnPhase};
pub use position::Position;
pub use rules::{LINES, WinLine, check_winner, is_draw, is_full};
pub use types::{BOARD_SIZE, Board, Player, Square};
