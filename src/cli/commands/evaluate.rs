//! Evaluate command - print the static evaluation of a position.

use minimax_chess::board::Position;
use minimax_chess::evaluate;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(long = "fen")]
    pub starting_position: Position,
}

impl Command for EvaluateArgs {
    fn execute(self) {
        println!("{}", evaluate::score(&self.starting_position));
    }
}
