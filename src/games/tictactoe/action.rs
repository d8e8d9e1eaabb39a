//! Move rejection errors.

/// Why a move was rejected.
///
/// Every variant is recoverable: the rejected command leaves the board,
/// turn and score exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// Index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square is already marked.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// No round is in progress.
    #[display("Round is over; start a new round first")]
    RoundInactive,

    /// The computer is still to move.
    #[display("Wait for the computer to move")]
    NotHumansTurn,

    /// The human is to move, so no computer move is pending.
    #[display("No computer move is pending")]
    NotComputersTurn,
}
