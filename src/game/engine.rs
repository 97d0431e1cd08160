use std::time::Duration;

use chess::{ChessMove, Piece, Square};
use log::info;
use rand::Rng;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::error::BoardError;
use crate::board::game_ending::GameEnding;
use crate::board::Position;
use crate::chess_search::search_best_move;
use crate::evaluate;
use crate::input_handler::MoveInput;

use super::random_move;

/// Search depth used when none is given.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Position,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            starting_position: Position::starting_position(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Owns a game in progress and the search that plays it.
pub struct Engine {
    position: Position,
    move_history: Vec<ChessMove>,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            position: config.starting_position,
            move_history: Vec::new(),
            search_context: SearchContext::new(config.search_depth),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Every legal move paired with its coordinate notation, e.g. `e2e4`.
    pub fn get_valid_moves(&self) -> Vec<(ChessMove, String)> {
        self.position
            .legal_moves()
            .into_iter()
            .map(|chess_move| (chess_move, chess_move.to_string()))
            .collect()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.position.game_ending()
    }

    /// `"1-0"`, `"0-1"` or `"1/2-1/2"` once the game is over.
    pub fn result(&self) -> Option<&'static str> {
        self.check_game_over()
            .map(|ending| ending.result(self.position.side_to_move()))
    }

    pub fn make_move_by_squares(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<ChessMove, EngineError> {
        let chess_move = self
            .position
            .find_move(from, to, promotion)
            .ok_or(EngineError::InvalidMove)?;

        self.apply_chess_move(chess_move)?;
        Ok(chess_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<ChessMove, EngineError> {
        match input {
            MoveInput::Coordinate {
                from,
                to,
                promotion,
            } => self.make_move_by_squares(from, to, promotion),
            MoveInput::Quit => Err(EngineError::InvalidMove),
        }
    }

    pub fn get_best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = search_best_move(&mut self.search_context, &mut self.position)
            .map_err(|error| EngineError::SearchError { error })?;

        info!(
            "searched {} positions in {:?}",
            self.search_context.searched_position_count(),
            self.search_context.last_search_duration()
        );
        Ok(best_move)
    }

    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self.get_best_move()?;
        self.apply_chess_move(best_move)?;
        Ok(best_move)
    }

    pub fn make_random_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ChessMove, EngineError> {
        let chess_move = random_move(&self.position, rng).ok_or(EngineError::SearchError {
            error: SearchError::NoAvailableMoves,
        })?;

        self.apply_chess_move(chess_move)?;
        Ok(chess_move)
    }

    /// Static evaluation of the current position, positive when White is better.
    pub fn get_score(&self) -> i16 {
        evaluate::score(&self.position)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.move_history.last().copied()
    }

    pub fn apply_chess_move(&mut self, chess_move: ChessMove) -> Result<(), EngineError> {
        self.position
            .apply(chess_move)
            .map_err(|error| EngineError::BoardError { error })?;

        self.move_history.push(chess_move);
        Ok(())
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}
