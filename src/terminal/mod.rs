//! Line-oriented terminal client.

mod app;

use anyhow::Result;
use app::{Input, describe, free_squares_hint, parse_input, winning_line};
use std::io::Write;
use strictly_series::{GameConfig, GameEvent, InvalidMove, Orchestrator};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  0-8 or a name (e.g. 'center', 'top left')   place your X
  new      start the next round
  reset    zero the score and start over
  board    show the board
  score    show the score
  quit     leave";

/// Runs an interactive series until stdin closes or the player quits.
#[instrument(skip_all, fields(delay_ms = config.computer_delay_ms(), json_events = json_events))]
pub async fn run(config: GameConfig, json_events: bool) -> Result<()> {
    info!("Starting terminal session");

    let mut orchestrator = Orchestrator::from_config(&config);
    let mut events = orchestrator.controller_mut().subscribe();

    println!("Tic-tac-toe: you are X, the computer is O. Type 'help' for commands.");
    println!("{}", orchestrator.controller().current_board().display());
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = parse_input(&line);
        debug!(?input, "Parsed input");

        let mut show_board = false;
        match input {
            Input::Quit => break,
            Input::Move(position) => {
                if let Err(e) = orchestrator.play_human_move(position.to_index()).await {
                    println!("{}", e);
                    if let InvalidMove::Occupied(_) = e {
                        let board = orchestrator.controller().current_board();
                        if let Some(hint) = free_squares_hint(&board) {
                            println!("{}", hint);
                        }
                    }
                }
            }
            Input::NewRound => orchestrator.controller_mut().start_round(),
            Input::Reset => orchestrator.controller_mut().reset_series(),
            Input::Board => show_board = true,
            Input::Score => println!("{}", orchestrator.controller().current_score()),
            Input::Help => println!("{}", HELP),
            Input::Empty => {}
            Input::Unknown(text) => println!("Unrecognised input '{}'. Type 'help'.", text),
        }

        let drained = drain(&mut events);
        if json_events {
            for event in &drained {
                println!("{}", serde_json::to_string(event)?);
            }
        }
        for message in describe(&drained) {
            println!("{}", message);
        }

        show_board |= drained
            .iter()
            .any(|e| matches!(e, GameEvent::MoveApplied { .. } | GameEvent::RoundStarted));
        if show_board {
            let board = orchestrator.controller().current_board();
            match winning_line(&drained) {
                Some(line) => println!("{}", board.display_highlighting(line)),
                None => println!("{}", board.display()),
            }
        }
        prompt()?;
    }

    info!(score = %orchestrator.controller().current_score(), "Terminal session ended");
    Ok(())
}

fn drain(events: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
