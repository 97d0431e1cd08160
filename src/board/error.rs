use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Cannot apply chess move {chess_move}, it is not legal in this position")]
    IllegalMoveApplicationError { chess_move: String },
    #[error("Cannot undo, no move has been applied to this position")]
    EmptyHistoryUndoError,
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFenError { fen: String, reason: String },
}
