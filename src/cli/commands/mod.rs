//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod calculate_best_move;
pub mod evaluate;
pub mod play;
pub mod random_move;
