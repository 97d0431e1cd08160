//! A human against the engine, over any line-based input and text output.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::board::side::Side;
use crate::input_handler::{read_move_input, InputError, MoveInput};

use super::engine::{Engine, EngineError};

const SEPARATOR: &str = "-----------------------------------";

#[derive(Error, Debug)]
pub enum PlayError {
    #[error("io error: {0}")]
    IOError(#[from] io::Error),
    #[error("input error: {0}")]
    InputError(#[from] InputError),
    #[error("engine error: {0}")]
    EngineError(#[from] EngineError),
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    Finished { result: &'static str },
    Quit,
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::White => "White",
        Side::Black => "Black",
    }
}

/// Runs the game until it ends or the human quits. Before every turn the board and its
/// static evaluation are printed; the engine answers with a full search on its turns.
pub fn play<R: BufRead, W: Write>(
    engine: &mut Engine,
    human: Side,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome, PlayError> {
    writeln!(output, "Welcome to your Chess Engine!")?;
    writeln!(output, "Format moves like: e2e4, g1f3, a7a5")?;
    writeln!(output, "{}", SEPARATOR)?;

    while engine.check_game_over().is_none() {
        writeln!(output, "{}", engine.position())?;
        writeln!(output, "\n")?;
        writeln!(output, "{}", engine.get_score())?;

        if engine.position().side_to_move() == human {
            if !human_turn(engine, human, input, output)? {
                return Ok(PlayOutcome::Quit);
            }
        } else {
            writeln!(output, "Engine is thinking...")?;
            output.flush()?;

            let engine_move = engine.make_best_move()?;
            writeln!(output, "Engine played: {}", engine_move)?;
            writeln!(output, "{}", SEPARATOR)?;
        }
    }

    let result = engine.result().unwrap_or("*");
    debug!("game over: {:?}", engine.check_game_over());
    writeln!(output, "Game Over!")?;
    writeln!(output, "Result: {}", result)?;

    Ok(PlayOutcome::Finished { result })
}

/// Prompts until a legal move is played. Returns false if the human quit.
fn human_turn<R: BufRead, W: Write>(
    engine: &mut Engine,
    human: Side,
    input: &mut R,
    output: &mut W,
) -> Result<bool, PlayError> {
    loop {
        write!(output, "Your move ({}): ", side_label(human))?;
        output.flush()?;

        match read_move_input(input) {
            Ok(MoveInput::Quit) => return Ok(false),
            Ok(move_input) => match engine.make_move_from_input(move_input) {
                Ok(_) => return Ok(true),
                Err(EngineError::InvalidMove) => writeln!(output, "Illegal move. Try again.")?,
                Err(error) => return Err(error.into()),
            },
            Err(InputError::InvalidInput { .. }) => {
                writeln!(output, "Invalid format. Use UCI format (e.g., e2e4).")?
            }
            Err(error) => return Err(error.into()),
        }
    }
}
