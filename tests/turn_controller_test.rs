//! Tests for the turn controller: turn protocol, outcomes and scoring.

use strictly_series::{
    Accepted, Board, GameEvent, InvalidMove, MoveReason, Player, RoundOutcome, SeriesOutcome,
    SeriesScore, TurnController, TurnPhase, WINS_NEEDED, completing_square,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn drain(events: &mut UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

/// Win if possible, else block, else take the first free square in a
/// centre-then-corners order.
fn human_choice(board: &Board) -> usize {
    completing_square(board, Player::Human)
        .or_else(|| completing_square(board, Player::Computer))
        .or_else(|| {
            [4, 0, 8, 2, 6, 1, 3, 5, 7]
                .into_iter()
                .find(|&i| board.is_empty(i))
        })
        .expect("round is still active so a square is free")
}

/// Plays one full round and returns its outcome.
fn play_round(controller: &mut TurnController) -> RoundOutcome {
    loop {
        let index = human_choice(&controller.current_board());
        match controller.submit_human_move(index).expect("human move is legal") {
            Accepted::RoundOver(outcome) => return outcome,
            Accepted::ComputerToMove => {
                if let Some(outcome) = controller.computer_move().expect("computer to move").outcome {
                    return outcome;
                }
            }
        }
    }
}

/// Finds a seeded controller whose first reply to `first` is `reply`.
fn controller_replying(first: usize, reply: usize) -> TurnController {
    (0..10_000)
        .find_map(|seed| {
            let mut controller = TurnController::seeded(seed);
            controller.submit_human_move(first).ok()?;
            (controller.computer_move().ok()?.index == reply).then_some(controller)
        })
        .expect("some seed replies at the requested square")
}

#[test]
fn test_end_to_end_block_then_occupied_rejection() {
    // Human 0, computer 4, human 1, computer must block at 2.
    let mut controller = controller_replying(0, 4);
    let mut events = controller.subscribe();

    assert_eq!(controller.submit_human_move(1), Ok(Accepted::ComputerToMove));
    let reply = controller.computer_move().unwrap();
    assert_eq!(reply.index, 2);
    assert_eq!(reply.reason, MoveReason::Block);
    assert_eq!(reply.outcome, None);

    let before = controller.current_board();
    assert_eq!(controller.submit_human_move(2), Err(InvalidMove::Occupied(2)));
    assert_eq!(controller.current_board(), before);
    assert_eq!(controller.phase(), TurnPhase::WaitingForHuman);

    assert_eq!(
        drain(&mut events),
        vec![
            GameEvent::MoveApplied {
                index: 1,
                player: Player::Human
            },
            GameEvent::MoveApplied {
                index: 2,
                player: Player::Computer
            },
        ]
    );
}

#[test]
fn test_computer_takes_win_over_block() {
    // Human 0, computer 3; human 8 forces the computer to block at 4.
    let mut controller = controller_replying(0, 3);
    assert_eq!(controller.submit_human_move(8), Ok(Accepted::ComputerToMove));
    let reply = controller.computer_move().unwrap();
    assert_eq!((reply.index, reply.reason), (4, MoveReason::Block));

    // Human 1 threatens 2 while the computer can complete 3-4-5.
    assert_eq!(controller.submit_human_move(1), Ok(Accepted::ComputerToMove));
    let board = controller.current_board();
    assert_eq!(completing_square(&board, Player::Human), Some(2));
    assert_eq!(completing_square(&board, Player::Computer), Some(5));

    let reply = controller.computer_move().unwrap();
    assert_eq!(reply.index, 5);
    assert_eq!(reply.reason, MoveReason::Win);
    assert!(matches!(reply.outcome, Some(RoundOutcome::ComputerWin(_))));
    assert_eq!(controller.phase(), TurnPhase::RoundOver);
    assert_eq!(controller.current_score(), SeriesScore::with_wins(0, 1));
}

#[test]
fn test_moves_rejected_after_round_until_restart() {
    let mut controller = TurnController::seeded(5);
    play_round(&mut controller);

    assert!(!controller.is_active());
    assert_eq!(controller.phase(), TurnPhase::RoundOver);
    let board = controller.current_board();
    let free = board.available_moves();
    for index in free.iter().copied().chain([0, 9]) {
        assert_eq!(controller.submit_human_move(index), Err(InvalidMove::RoundInactive));
    }
    assert_eq!(controller.computer_move().map(|m| m.index), Err(InvalidMove::RoundInactive));
    assert_eq!(controller.current_board(), board);

    let mut events = controller.subscribe();
    controller.start_round();
    assert_eq!(drain(&mut events), vec![GameEvent::RoundStarted]);
    assert!(controller.is_active());
    assert_eq!(controller.turn(), Player::Human);
    assert_eq!(controller.current_board(), Board::new());
    assert!(controller.submit_human_move(0).is_ok());
}

#[test]
fn test_each_round_emits_one_outcome() {
    let mut controller = TurnController::seeded(21);
    let mut events = controller.subscribe();

    for _ in 0..30 {
        let outcome = play_round(&mut controller);
        let round_events = drain(&mut events);
        let outcomes: Vec<_> = round_events
            .iter()
            .filter_map(|e| match e {
                GameEvent::RoundOutcome { outcome } => Some(*outcome),
                _ => None,
            })
            .collect();
        assert_eq!(outcomes, vec![outcome]);
        controller.start_round();
        drain(&mut events);
    }
}

#[test]
fn test_draw_leaves_score_unchanged() {
    let mut controller = TurnController::seeded(8);
    let mut events = controller.subscribe();

    for _ in 0..500 {
        let before = controller.current_score();
        let outcome = play_round(&mut controller);
        let round_events = drain(&mut events);

        if outcome == RoundOutcome::Draw {
            assert_eq!(controller.current_score(), before);
            assert!(controller.current_board().is_full());
            assert_eq!(controller.current_board().winner(), None);
            assert!(!round_events.iter().any(|e| matches!(
                e,
                GameEvent::ScoreUpdated { .. } | GameEvent::SeriesOutcome { .. }
            )));
            return;
        }
        controller.start_round();
        drain(&mut events);
    }
    panic!("no draw in 500 rounds");
}

#[test]
fn test_series_clinched_on_third_human_win() {
    let mut controller = TurnController::seeded(99);
    let mut events = controller.subscribe();

    for _ in 0..500 {
        let before = controller.current_score();
        let outcome = play_round(&mut controller);
        let round_events = drain(&mut events);
        let after = controller.current_score();
        let clinched = round_events
            .iter()
            .any(|e| *e == GameEvent::SeriesOutcome {
                outcome: SeriesOutcome::HumanSeriesWin,
            });

        match outcome {
            RoundOutcome::HumanWin(_) => {
                assert_eq!(after.human_wins(), before.human_wins() + 1);
                assert_eq!(after.computer_wins(), before.computer_wins());
                assert_eq!(clinched, after.human_wins() >= WINS_NEEDED);
                if clinched {
                    // Round outcome first, then score, then the series event.
                    let tail: Vec<_> = round_events.iter().rev().take(3).rev().cloned().collect();
                    assert_eq!(
                        tail,
                        vec![
                            GameEvent::RoundOutcome { outcome },
                            GameEvent::ScoreUpdated { score: after },
                            GameEvent::SeriesOutcome {
                                outcome: SeriesOutcome::HumanSeriesWin
                            },
                        ]
                    );
                    assert_eq!(before.human_wins(), WINS_NEEDED - 1);
                    return;
                }
            }
            RoundOutcome::ComputerWin(_) => {
                // Computer wins never clinch anything, however many there are.
                assert_eq!(after.computer_wins(), before.computer_wins() + 1);
                assert!(!clinched);
            }
            RoundOutcome::Draw => {
                assert_eq!(after, before);
                assert!(!clinched);
            }
        }
        controller.start_round();
        drain(&mut events);
    }
    panic!("human never clinched the series");
}

#[test]
fn test_reset_series_zeroes_score_and_restarts() {
    let mut controller = TurnController::seeded(4);
    for _ in 0..500 {
        if controller.current_score() != SeriesScore::new() {
            break;
        }
        play_round(&mut controller);
        controller.start_round();
    }
    assert_ne!(controller.current_score(), SeriesScore::new());

    controller.submit_human_move(4).unwrap();
    let mut events = controller.subscribe();
    controller.reset_series();

    assert_eq!(
        drain(&mut events),
        vec![GameEvent::SeriesReset, GameEvent::RoundStarted]
    );
    assert_eq!(controller.current_score(), SeriesScore::new());
    assert_eq!(controller.current_board(), Board::new());
    assert_eq!(controller.phase(), TurnPhase::WaitingForHuman);
}
