//! Play command - play a game against the computer.

use std::io;

use minimax_chess::board::side::Side;
use minimax_chess::board::{Position, STARTING_POSITION_FEN};
use minimax_chess::game::engine::{Engine, EngineConfig};
use minimax_chess::game::play::play;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: Side,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Position,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        });

        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(err) = play(&mut engine, self.color, &mut stdin.lock(), &mut stdout.lock()) {
            eprintln!("Game aborted: {}", err);
        }
    }
}
