//! Random move command - pick any legal move without searching.

use minimax_chess::board::Position;
use minimax_chess::game::random_move;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct RandomMoveArgs {
    #[structopt(long = "fen")]
    pub starting_position: Position,
}

impl Command for RandomMoveArgs {
    fn execute(self) {
        match random_move(&self.starting_position, &mut rand::thread_rng()) {
            Some(chess_move) => println!("{}", chess_move),
            None => eprintln!("There are no valid moves in the given position."),
        }
    }
}
