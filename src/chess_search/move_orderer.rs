//! Chess-specific move ordering for improved alpha-beta pruning.

use chess::ChessMove;

use crate::alpha_beta_searcher::MoveOrderer;
use crate::board::Position;

/// Puts every capture ahead of every quiet move. The sort is stable, so each group
/// keeps the order the moves were generated in.
#[derive(Clone, Default, Debug)]
pub struct ChessMoveOrderer;

impl MoveOrderer<Position, ChessMove> for ChessMoveOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [ChessMove], state: &Position) {
        moves.sort_by_key(|&chess_move| !state.is_capture(chess_move));
    }
}
