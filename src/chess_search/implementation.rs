//! Chess-specific trait implementations for the alpha-beta search.

use chess::ChessMove;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{
    minimax, select_best_move, Evaluator, GameMove, GameState, MoveGenerator, SearchContext,
    SearchError,
};
use crate::board::{error::BoardError, Position};
use crate::evaluate;

use super::move_orderer::ChessMoveOrderer;

impl GameState for Position {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.side_to_move().maximize_score()
    }

    #[inline]
    fn is_game_over(&self) -> bool {
        Position::is_game_over(self)
    }
}

impl GameMove for ChessMove {
    type State = Position;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Position) -> Result<(), BoardError> {
        state.apply(*self)
    }

    #[inline]
    fn undo(&self, state: &mut Position) -> Result<(), BoardError> {
        state.undo()
    }

    #[inline]
    fn is_capture(&self, state: &Position) -> bool {
        state.is_capture(*self)
    }
}

#[derive(Clone, Default)]
pub struct ChessMoveGenerator;

impl MoveGenerator<Position> for ChessMoveGenerator {
    type Move = ChessMove;
    type MoveList = Vec<ChessMove>;

    #[inline]
    fn generate_moves(&self, state: &Position) -> Vec<ChessMove> {
        state.legal_moves()
    }
}

#[derive(Clone, Default)]
pub struct ChessEvaluator;

impl Evaluator<Position> for ChessEvaluator {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn evaluate(&self, state: &Position) -> i16 {
        evaluate::score(state)
    }
}

/// Searches for the best chess move from the given position.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    position: &mut Position,
) -> Result<ChessMove, SearchError> {
    select_best_move(
        context,
        position,
        &ChessMoveGenerator,
        &ChessEvaluator,
        &ChessMoveOrderer,
    )
}

/// Minimax value of the position searched `depth` plies deep with a full window,
/// maximizing for White.
pub fn search_score(
    context: &mut SearchContext,
    position: &mut Position,
    depth: u8,
) -> Result<i16, SearchError> {
    let maximizing_player = position.is_maximizing_player();
    minimax(
        context,
        position,
        &ChessMoveGenerator,
        &ChessEvaluator,
        &ChessMoveOrderer,
        depth,
        i16::MIN,
        i16::MAX,
        maximizing_player,
    )
}
