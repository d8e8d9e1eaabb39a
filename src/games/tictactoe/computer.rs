//! Heuristic computer player.
//!
//! One ply only: take a winning square, else block the human, else play a
//! random empty square. It is deliberately beatable.

use super::rules::LINES;
use super::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Why the computer picked its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MoveReason {
    /// Completes a computer line.
    Win,
    /// Stops a human line.
    Block,
    /// Nothing urgent on the board.
    Random,
}

/// Finds the empty square that completes a line for `player`.
///
/// Lines are scanned in declaration order and the first line with two
/// `player` marks and one empty square decides; within that line the
/// empty square is the first in listed order.
#[instrument(skip(board))]
pub fn completing_square(board: &Board, player: Player) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let squares = line.squares(board);
        let owned = squares.iter().filter(|s| s.is_marked_by(player)).count();
        let empty = squares.iter().position(|s| *s == Square::Empty)?;
        (owned == 2).then(|| line.cells()[empty])
    })
}

/// Picks the computer's next square, or `None` on a full board.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, MoveReason)> {
    if let Some(index) = completing_square(board, Player::Computer) {
        debug!(index, "Computer can win");
        return Some((index, MoveReason::Win));
    }

    if let Some(index) = completing_square(board, Player::Human) {
        debug!(index, "Computer blocks");
        return Some((index, MoveReason::Block));
    }

    let available = board.available_moves();
    let index = *available.choose(rng)?;
    debug!(index, choices = available.len(), "Computer plays randomly");
    Some((index, MoveReason::Random))
}
