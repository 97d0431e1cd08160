//! The board abstraction the search runs against: a `chess::Board` plus the history
//! needed to undo moves and to detect the draw rules the underlying board does not track.

pub mod error;
pub mod game_ending;
pub mod side;

mod display;

use std::str::FromStr;

use chess::{BitBoard, Board, BoardStatus, ChessMove, MoveGen, Piece, Square, ALL_SQUARES};

use error::BoardError;
use game_ending::GameEnding;
use side::Side;

pub use display::piece_char;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;
const FIVEFOLD_REPETITION: usize = 5;

#[derive(Clone, Copy)]
struct Snapshot {
    board: Board,
    halfmove_clock: u16,
}

/// A chess position with undo history. `apply` pushes the current state and `undo`
/// restores it, so the two are exact inverses as long as they are strictly nested.
#[derive(Clone)]
pub struct Position {
    current: Snapshot,
    history: Vec<Snapshot>,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl Position {
    pub fn starting_position() -> Self {
        Self::from_board(Board::default(), 0)
    }

    pub fn from_board(board: Board, halfmove_clock: u16) -> Self {
        Self {
            current: Snapshot {
                board,
                halfmove_clock,
            },
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let board = Board::from_str(fen).map_err(|error| BoardError::InvalidFenError {
            fen: fen.to_string(),
            reason: error.to_string(),
        })?;

        let halfmove_clock = match fen.split_whitespace().nth(4) {
            Some(field) => field.parse().map_err(|_| BoardError::InvalidFenError {
                fen: fen.to_string(),
                reason: format!("invalid halfmove clock `{}`", field),
            })?,
            None => 0,
        };

        Ok(Self::from_board(board, halfmove_clock))
    }

    pub fn board(&self) -> &Board {
        &self.current.board
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.current.halfmove_clock
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn side_to_move(&self) -> Side {
        self.current.board.side_to_move().into()
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.current.board).collect()
    }

    pub fn is_legal(&self, chess_move: ChessMove) -> bool {
        self.current.board.legal(chess_move)
    }

    /// Finds the legal move matching the given squares. A missing promotion piece
    /// defaults to a queen; a promotion piece on a move that does not promote is
    /// never legal.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<ChessMove> {
        let is_promotion = self.current.board.piece_on(from) == Some(Piece::Pawn)
            && matches!(to.get_rank(), chess::Rank::First | chess::Rank::Eighth);
        let promotion = match (promotion, is_promotion) {
            (None, true) => Some(Piece::Queen),
            (Some(_), false) => return None,
            (given, _) => given,
        };

        let chess_move = ChessMove::new(from, to, promotion);
        if self.is_legal(chess_move) {
            Some(chess_move)
        } else {
            None
        }
    }

    /// Occupant of the square at `index` (0 = a1, 63 = h8).
    pub fn piece_at(&self, index: usize) -> Option<(Piece, Side)> {
        let square = *ALL_SQUARES.get(index)?;
        let board = &self.current.board;
        let piece = board.piece_on(square)?;
        let side = board.color_on(square)?;
        Some((piece, side.into()))
    }

    /// True for normal captures and en passant.
    pub fn is_capture(&self, chess_move: ChessMove) -> bool {
        let board = &self.current.board;
        let source = chess_move.get_source();
        let dest = chess_move.get_dest();

        if board.piece_on(dest).is_some() {
            return true;
        }

        board.piece_on(source) == Some(Piece::Pawn) && source.get_file() != dest.get_file()
    }

    pub fn apply(&mut self, chess_move: ChessMove) -> Result<(), BoardError> {
        if !self.is_legal(chess_move) {
            return Err(BoardError::IllegalMoveApplicationError {
                chess_move: chess_move.to_string(),
            });
        }

        let board = self.current.board;
        let resets_clock = self.is_capture(chess_move)
            || board.piece_on(chess_move.get_source()) == Some(Piece::Pawn);
        let halfmove_clock = if resets_clock {
            0
        } else {
            self.current.halfmove_clock.saturating_add(1)
        };

        self.history.push(self.current);
        self.current = Snapshot {
            board: board.make_move_new(chess_move),
            halfmove_clock,
        };
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), BoardError> {
        let previous = self
            .history
            .pop()
            .ok_or(BoardError::EmptyHistoryUndoError)?;
        self.current = previous;
        Ok(())
    }

    pub fn is_checkmate(&self) -> bool {
        self.current.board.status() == BoardStatus::Checkmate
    }

    pub fn is_game_over(&self) -> bool {
        self.game_ending().is_some()
    }

    /// Returns how the game ended, if it has.
    pub fn game_ending(&self) -> Option<GameEnding> {
        match self.current.board.status() {
            BoardStatus::Checkmate => return Some(GameEnding::Checkmate),
            BoardStatus::Stalemate => return Some(GameEnding::Stalemate),
            BoardStatus::Ongoing => (),
        }

        if has_insufficient_material(&self.current.board) {
            return Some(GameEnding::InsufficientMaterial);
        }

        if self.current.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(GameEnding::SeventyFiveMoveRule);
        }

        if self.repetition_count() >= FIVEFOLD_REPETITION {
            return Some(GameEnding::FivefoldRepetition);
        }

        None
    }

    /// How many times the current position has occurred since the last capture or
    /// pawn move, counting the current occurrence.
    pub fn repetition_count(&self) -> usize {
        let hash = self.current.board.get_hash();
        let reversible_plies = self.current.halfmove_clock as usize;

        1 + self
            .history
            .iter()
            .rev()
            .take(reversible_plies)
            .filter(|snapshot| snapshot.board.get_hash() == hash)
            .count()
    }
}

/// Neither side can mate: bare kings, a single minor piece, or only bishops that all
/// stand on squares of one color.
fn has_insufficient_material(board: &Board) -> bool {
    let heavy_or_pawns =
        *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy_or_pawns != chess::EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);
    if (knights | bishops).popcnt() <= 1 {
        return true;
    }

    knights == chess::EMPTY && bishops_share_square_color(bishops)
}

fn bishops_share_square_color(bishops: BitBoard) -> bool {
    let mut colors =
        bishops.map(|square| (square.get_rank().to_index() + square.get_file().to_index()) % 2);
    match colors.next() {
        Some(first) => colors.all(|color| color == first),
        None => true,
    }
}
