mod input;

pub use input::{read_move_input, InputError, MoveInput};
