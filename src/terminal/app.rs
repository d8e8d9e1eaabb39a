//! Input parsing and event rendering for the terminal client.

use strictly_series::{Board, GameEvent, Player, Position, RoundOutcome, SeriesOutcome, WinLine};

const FINALE: &str = "\
*  .  *  .  *  .  *  .  *  .  *
   You won the series! Congratulations!
*  .  *  .  *  .  *  .  *  .  *";

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(Position),
    /// Start the next round.
    NewRound,
    /// Zero the score and start over.
    Reset,
    /// Show the board.
    Board,
    /// Show the score.
    Score,
    /// Show commands.
    Help,
    /// Leave.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

/// Parses one line of input.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Input::Empty,
        "new" | "n" | "next" => Input::NewRound,
        "reset" => Input::Reset,
        "board" | "b" => Input::Board,
        "score" | "s" => Input::Score,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Position::from_label_or_number(trimmed)
            .map(Input::Move)
            .unwrap_or_else(|| Input::Unknown(trimmed.to_string())),
    }
}

/// Turns a batch of events into messages.
///
/// When a batch clinches the series the finale replaces the plain
/// round-win message.
pub fn describe(events: &[GameEvent]) -> Vec<String> {
    let clinched = events
        .iter()
        .any(|e| matches!(e, GameEvent::SeriesOutcome { .. }));

    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::RoundStarted => Some("New round. You move first.".to_string()),
            GameEvent::MoveApplied { index, player } => {
                let square = Position::from_index(*index)
                    .map(|p| p.label().to_string())
                    .unwrap_or_else(|| index.to_string());
                let who = match player {
                    Player::Human => "You",
                    Player::Computer => "Computer",
                };
                Some(format!("{} played {}", who, square))
            }
            GameEvent::RoundOutcome { outcome } => match outcome {
                RoundOutcome::HumanWin(_) if clinched => None,
                RoundOutcome::HumanWin(line) => Some(format!(
                    "You win this round ({})! Type 'new' for the next one.",
                    line
                )),
                RoundOutcome::ComputerWin(line) => Some(format!(
                    "The computer wins this round ({}). Type 'new' to try again.",
                    line
                )),
                RoundOutcome::Draw => Some("Draw! Type 'new' to play again.".to_string()),
            },
            GameEvent::ScoreUpdated { score } => Some(format!("Score: {}", score)),
            GameEvent::SeriesOutcome {
                outcome: SeriesOutcome::HumanSeriesWin,
            } => Some(FINALE.to_string()),
            GameEvent::SeriesReset => Some("Score reset.".to_string()),
        })
        .collect()
}

/// The line that ended the round in this batch, if any.
pub fn winning_line(events: &[GameEvent]) -> Option<WinLine> {
    events.iter().find_map(|event| match event {
        GameEvent::RoundOutcome { outcome } => outcome.line(),
        _ => None,
    })
}

/// Lists the squares still open, or `None` on a full board.
pub fn free_squares_hint(board: &Board) -> Option<String> {
    let free = Position::valid_moves(board);
    if free.is_empty() {
        return None;
    }
    let labels: Vec<String> = free
        .iter()
        .map(|pos| format!("{} ({})", pos.to_index(), pos.label()))
        .collect();
    Some(format!("Free squares: {}", labels.join(", ")))
}
