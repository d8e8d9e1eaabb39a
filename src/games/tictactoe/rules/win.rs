//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices that form a winning pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three indices of this line, in declaration order.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The squares currently on this line.
    pub fn squares(self, board: &Board) -> [Square; 3] {
        self.0.map(|i| board.get(i).unwrap_or(Square::Empty))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// Winning combinations. Scan order is rows, columns, then diagonals.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first line (in [`LINES`] order) they
/// completed, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    LINES.into_iter().find_map(|line| match line.squares(board) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some((a, line))
        }
        _ => None,
    })
}
