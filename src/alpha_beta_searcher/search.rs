//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once a node's window closes
//! (`beta <= alpha`) its remaining siblings cannot change what an ancestor will choose,
//! so they are skipped. The value computed at the root is identical to plain minimax.
//!
//! The search is a fixed-depth, single-threaded depth-first traversal. Every node is a
//! plain recursive call; nothing is cached between calls and there is no time limit.
//!
//! # Move Ordering
//! Moves are handed to a [`MoveOrderer`] before being searched. Searching the strongest
//! moves first narrows the window sooner and leads to more cutoffs.
//!
//! # Board Mutation
//! The state is mutated in place. Each applied move is wrapped in a guard that undoes it
//! when the guard goes out of scope, so the board is restored on every exit path of a
//! frame, including cutoffs, errors and panics. The guard holds the only mutable borrow
//! of the state, which keeps apply/undo strictly nested.

use std::cmp::{max, min};
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use log::{debug, error, trace};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, MoveOrderer};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("failed to apply move {game_move}: {error}")]
    MoveApplication { game_move: String, error: String },
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    last_score: Option<i16>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: i16, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { depth },
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Number of nodes visited, root children included.
    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    /// Number of times a node stopped searching its remaining moves.
    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    /// Score of the move returned by the last root search.
    pub fn last_score(&self) -> Option<i16> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// A move that has been applied to a state and will be undone when this guard drops.
struct AppliedMove<'a, M: GameMove> {
    state: &'a mut M::State,
    game_move: &'a M,
}

impl<'a, M: GameMove> AppliedMove<'a, M> {
    fn apply(game_move: &'a M, state: &'a mut M::State) -> Result<Self, SearchError> {
        game_move
            .apply(state)
            .map_err(|error| SearchError::MoveApplication {
                game_move: format!("{:?}", game_move),
                error: format!("{:?}", error),
            })?;

        Ok(Self { state, game_move })
    }
}

impl<'a, M: GameMove> Deref for AppliedMove<'a, M> {
    type Target = M::State;

    fn deref(&self) -> &M::State {
        &*self.state
    }
}

impl<'a, M: GameMove> DerefMut for AppliedMove<'a, M> {
    fn deref_mut(&mut self) -> &mut M::State {
        &mut *self.state
    }
}

impl<'a, M: GameMove> Drop for AppliedMove<'a, M> {
    fn drop(&mut self) {
        if let Err(undo_error) = self.game_move.undo(self.state) {
            error!("failed to undo {:?}: {:?}", self.game_move, undo_error);
        }
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
fn with_move_applied<M, F, R>(game_move: &M, state: &mut M::State, f: F) -> Result<R, SearchError>
where
    M: GameMove,
    F: FnOnce(&mut M::State) -> Result<R, SearchError>,
{
    let mut applied = AppliedMove::apply(game_move, state)?;
    f(&mut *applied)
}

/// Updates best score and move if new score is strictly better, so the earliest of
/// several equally scored moves is kept.
fn update_best<M: Clone>(
    score: i16,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i16,
    best_move: &mut Option<M>,
) {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
}

/// Picks the best move for the player to move, searching `context.search_depth()` plies.
///
/// The root is searched like any other node except that it remembers which move
/// produced the best score. Whether the root maximizes is decided by
/// [`GameState::is_maximizing_player`].
///
/// # Returns
///
/// - `Ok(best_move)` - The first move reaching the best score
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves are available; callers
///   are expected to check for the end of the game first
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn select_best_move<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    let depth = context.search_depth();
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();

    let maximizing_player = state.is_maximizing_player();
    let mut candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    move_orderer.order_moves(candidates.as_mut(), state);

    debug!(
        "alpha-beta search depth: {}, candidates: {}, maximizing: {}",
        depth,
        candidates.len(),
        maximizing_player
    );

    let mut best_score = if maximizing_player {
        i16::MIN
    } else {
        i16::MAX
    };
    let mut best_move = None;
    let mut alpha = i16::MIN;
    let mut beta = i16::MAX;

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            minimax(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;
        trace!("root candidate {:?} scored {}", game_move, score);

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = max(alpha, score);
        } else {
            beta = min(beta, score);
        }
        if beta <= alpha {
            context.stats.cutoff_count += 1;
            break;
        }
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    context.stats.record_result(best_score, start.elapsed());

    debug!(
        "best move {:?} scored {} after {} positions",
        best_move,
        best_score,
        context.searched_position_count()
    );

    Ok(best_move)
}

/// Core alpha-beta minimax search with pruning.
///
/// Returns the static evaluation when `depth` is 0 or the game is over, without
/// generating moves. Otherwise every ordered move is applied, searched one ply
/// shallower for the other player, and undone, until the window closes.
///
/// # Parameters
///
/// - `depth` - Remaining search depth (decrements each ply)
/// - `alpha` - Best score the maximizer is already assured of
/// - `beta` - Best score the minimizer is already assured of
/// - `maximizing_player` - True if the player to move wants to maximize score
#[allow(clippy::too_many_arguments)]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax<S, G, E, O>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    mut alpha: i16,
    mut beta: i16,
    maximizing_player: bool,
) -> Result<i16, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
    O: MoveOrderer<S, G::Move>,
{
    context.stats.position_count += 1;

    if depth == 0 || state.is_game_over() {
        return Ok(evaluator.evaluate(state));
    }

    let mut candidates = move_generator.generate_moves(state);
    move_orderer.order_moves(candidates.as_mut(), state);

    let mut best_score = if maximizing_player {
        i16::MIN
    } else {
        i16::MAX
    };

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            minimax(
                context,
                state,
                move_generator,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;

        if maximizing_player {
            best_score = max(best_score, score);
            alpha = max(alpha, score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, score);
        }

        if beta <= alpha {
            context.stats.cutoff_count += 1;
            break;
        }
    }

    Ok(best_score)
}
