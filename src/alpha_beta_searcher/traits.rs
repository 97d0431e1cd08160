//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone {
    /// Returns true if the current player is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Returns true if the game has ended. The search evaluates such states directly
    /// instead of expanding them.
    fn is_game_over(&self) -> bool;
}

/// Represents an action that can be applied to and undone from a game state.
///
/// Applying a move also hands the turn to the other player; `undo` must be the exact
/// inverse of the most recent `apply`.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Returns true if this move captures material. Default implementation returns false.
    fn is_capture(&self, _state: &Self::State) -> bool {
        false
    }
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> i16;
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<S: GameState, M> {
    /// Sorts moves in-place, placing "better" moves first.
    fn order_moves(&self, moves: &mut [M], state: &S);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<S: GameState, M> MoveOrderer<S, M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M], _state: &S) {}
}

/// Abstraction over move collections.
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}
