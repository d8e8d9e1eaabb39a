//! Core domain types for tic-tac-toe.

use super::action::InvalidMove;
use super::rules::{self, WinLine};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The human player (X, always moves first).
    Human,
    /// The computer opponent (O).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark this player draws on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if the square is occupied by `player`.
    pub fn is_marked_by(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Marks the square at `index` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for indices above 8 and
    /// [`InvalidMove::Occupied`] if the square is already marked. The board
    /// is left untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        match self.squares.get_mut(index) {
            None => Err(InvalidMove::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winner and the first completed line, if any.
    pub fn winner(&self) -> Option<(Player, WinLine)> {
        rules::check_winner(self)
    }

    /// Indices of empty squares in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of marked squares.
    pub fn marked_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_SIZE];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so the player knows what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    Square::Occupied(player) => result.push(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Formats the board with the squares of `line` bracketed.
    ///
    /// Cells are three characters wide so the brackets keep the grid aligned.
    pub fn display_highlighting(&self, line: WinLine) -> String {
        let rows: Vec<String> = (0..3)
            .map(|row| {
                (0..3)
                    .map(|col| {
                        let pos = row * 3 + col;
                        let mark = match self.squares[pos] {
                            Square::Empty => ' ',
                            Square::Occupied(player) => player.symbol(),
                        };
                        if line.contains(pos) {
                            format!("[{}]", mark)
                        } else {
                            format!(" {} ", mark)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
