//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, evaluate::EvaluateArgs, play::PlayArgs,
    random_move::RandomMoveArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "minimax-chess",
    about = "A fixed-depth minimax chess engine with alpha-beta pruning ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches `--depth` plies ahead (default: 5). You play White unless you pick another side with `--color` (white, black or random). The initial position can be specified using FEN notation with `--fen` (default: starting position). Type `quit` to leave."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the chess engine to determine the best move from a given position, provided in FEN notation with `--fen` (required). You can optionally specify the depth of the search with the `--depth` arg (default: 5)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "evaluate",
        about = "Print the static evaluation of the position given with `--fen`, where a pawn is worth 10 and positive scores favor White."
    )]
    Evaluate(EvaluateArgs),
    #[structopt(
        name = "random-move",
        about = "Print a random legal move from the position given with `--fen`."
    )]
    RandomMove(RandomMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            CalculateBestMove(cmd),
            Evaluate(cmd),
            RandomMove(cmd),
        }
    }
}
