//! Generic fixed-depth alpha-beta search, independent of any particular game.
//!
//! A game plugs in by implementing [`GameState`], [`GameMove`], [`MoveGenerator`],
//! [`Evaluator`] and optionally [`MoveOrderer`].

mod search;
mod traits;


pub use search::{minimax, select_best_move, SearchContext, SearchError};
pub use traits::{
    Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer, NoOpMoveOrderer,
};
