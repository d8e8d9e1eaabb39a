//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are kept apart from
//! board storage so the controller and the computer player can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinLine, check_winner};
