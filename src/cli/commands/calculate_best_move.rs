//! Calculate best move command - determine the best move from a position.

use minimax_chess::board::Position;
use minimax_chess::game::engine::{Engine, EngineConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(long = "fen")]
    pub starting_position: Position,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);

        if engine.get_valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
