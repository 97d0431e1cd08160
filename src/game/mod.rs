pub mod engine;
pub mod play;
mod random;

pub use random::random_move;
