//! Chess-specific tests for the alpha-beta search.
//!
//! Test coverage:
//! - Mate finding (mate in 1, mate in 2)
//! - Back rank mate patterns
//! - One-ply search picks the greedy best capture
//! - Alpha-beta agrees with exhaustive minimax on real chess positions
//! - The searched position is left untouched

use chess::{ChessMove, Square};
use rand::{rngs::StdRng, SeedableRng};
use std::str::FromStr;

use crate::alpha_beta_searcher::{MoveOrderer, SearchContext, SearchError};
use crate::board::{side::Side, Position};
use crate::evaluate::{self, BLACK_WINS, WHITE_WINS};
use crate::game::random_move;

use super::*;

fn std_move(from: &str, to: &str) -> ChessMove {
    ChessMove::new(
        Square::from_str(from).unwrap(),
        Square::from_str(to).unwrap(),
        None,
    )
}

/// Unpruned minimax over every legal move.
fn exhaustive_minimax(position: &mut Position, depth: u8, maximizing_player: bool) -> i16 {
    if depth == 0 || position.is_game_over() {
        return evaluate::score(position);
    }

    let mut best_score = if maximizing_player {
        i16::MIN
    } else {
        i16::MAX
    };
    for chess_move in position.legal_moves() {
        position.apply(chess_move).unwrap();
        let score = exhaustive_minimax(position, depth - 1, !maximizing_player);
        position.undo().unwrap();

        best_score = if maximizing_player {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }
    best_score
}

/// Plays up to `plies` moves, each side searching one ply less than the last,
/// and stops early once the game is over.
fn play_out(position: &mut Position, plies: u8) {
    for depth in (1..=plies).rev() {
        if position.is_game_over() {
            break;
        }
        let mut context = SearchContext::new(depth);
        let chess_move = search_best_move(&mut context, position).unwrap();
        position.apply(chess_move).unwrap();
    }
}

/// Reaches a varied middlegame by playing seeded random moves from the start.
fn random_position(rng: &mut StdRng, plies: usize) -> Position {
    let mut position = Position::starting_position();
    for _ in 0..plies {
        if position.is_game_over() {
            break;
        }
        match random_move(&position, rng) {
            Some(chess_move) => position.apply(chess_move).unwrap(),
            None => break,
        }
    }
    position
}

fn assert_matches_exhaustive(position: &mut Position, depth: u8) {
    if position.is_game_over() {
        return;
    }

    let maximizing_player = position.side_to_move().maximize_score();
    let expected = exhaustive_minimax(position, depth, maximizing_player);

    let mut context = SearchContext::new(depth);
    let chess_move = search_best_move(&mut context, position).unwrap();
    assert_eq!(context.last_score(), Some(expected), "{:?}", position);

    // the chosen move is the first ordered move reaching the minimax value
    let mut ordered = position.legal_moves();
    ChessMoveOrderer.order_moves(&mut ordered, position);
    let first_best = ordered
        .into_iter()
        .find(|&candidate| {
            position.apply(candidate).unwrap();
            let score = exhaustive_minimax(position, depth - 1, !maximizing_player);
            position.undo().unwrap();
            score == expected
        })
        .unwrap();
    assert_eq!(chess_move, first_best, "{:?}", position);

    let mut context = SearchContext::new(depth);
    assert_eq!(
        search_score(&mut context, position, depth).unwrap(),
        expected
    );
}

#[test]
fn test_find_mate_in_1_white() {
    for depth in 1..=2 {
        let mut context = SearchContext::new(depth);
        let mut position = Position::from_fen("1Q6/8/8/8/8/8/k1K5/8 w - - 0 1").unwrap();

        let chess_move = search_best_move(&mut context, &mut position).unwrap();
        position.apply(chess_move).unwrap();

        assert!(
            position.is_checkmate(),
            "{} does not lead to checkmate at depth {}",
            chess_move,
            depth
        );
        assert_eq!(context.last_score(), Some(WHITE_WINS));
    }
}

#[test]
fn test_find_mate_in_1_black() {
    for depth in 1..=2 {
        let mut context = SearchContext::new(depth);
        let mut position = Position::from_fen("1q6/8/8/8/8/8/K1k5/8 b - - 0 1").unwrap();

        let chess_move = search_best_move(&mut context, &mut position).unwrap();
        position.apply(chess_move).unwrap();

        assert!(
            position.is_checkmate(),
            "{} does not lead to checkmate at depth {}",
            chess_move,
            depth
        );
        assert_eq!(context.last_score(), Some(BLACK_WINS));
    }
}

#[test]
fn test_deeper_search_still_sees_the_win() {
    let mut context = SearchContext::new(3);
    let mut position = Position::from_fen("1Q6/8/8/8/8/8/k1K5/8 w - - 0 1").unwrap();

    search_best_move(&mut context, &mut position).unwrap();

    assert_eq!(context.last_score(), Some(WHITE_WINS));
}

#[test]
fn test_back_rank_mate_in_2_white() {
    let mut position = Position::from_fen("1k5r/ppp5/8/8/8/8/3Q4/K2R4 w - - 0 1").unwrap();

    let mut context = SearchContext::new(3);
    let first_move = search_best_move(&mut context, &mut position).unwrap();
    assert_eq!(context.last_score(), Some(WHITE_WINS));
    assert!(
        [std_move("d1", "d8"), std_move("d2", "d8")].contains(&first_move),
        "{} does not start the back rank mate",
        first_move
    );

    play_out(&mut position, 3);

    assert!(position.is_checkmate());
    assert_eq!(position.side_to_move(), Side::Black);
}

#[test]
fn test_back_rank_mate_in_2_black() {
    let mut position = Position::from_fen("4r2k/4q3/8/8/8/8/5PPP/R5K1 b - - 0 1").unwrap();

    play_out(&mut position, 3);

    assert!(position.is_checkmate());
    assert_eq!(position.side_to_move(), Side::White);
    assert_eq!(evaluate::score(&position), BLACK_WINS);
}

#[test]
fn test_one_ply_search_takes_hanging_queen() {
    // black queen on d5 is attacked by the e4 pawn and the c3 knight
    let mut position =
        Position::from_fen("rnb1kbnr/ppp1pppp/8/3q4/4P3/2N5/PPPP1PPP/R1BQKBNR w KQkq - 0 3")
            .unwrap();
    let mut context = SearchContext::new(1);

    let chess_move = search_best_move(&mut context, &mut position).unwrap();

    assert_eq!(chess_move.get_dest(), Square::D5);
    assert!(position.is_capture(chess_move));
}

#[test]
fn test_one_ply_search_is_greedy() {
    let mut rng = StdRng::seed_from_u64(7);
    for plies in &[0, 6, 11, 20] {
        let mut position = random_position(&mut rng, *plies);
        if position.is_game_over() {
            continue;
        }
        let maximizing_player = position.side_to_move().maximize_score();

        let mut ordered = position.legal_moves();
        ChessMoveOrderer.order_moves(&mut ordered, &position);
        let mut greedy = None;
        for candidate in ordered {
            position.apply(candidate).unwrap();
            let score = evaluate::score(&position);
            position.undo().unwrap();

            let is_better = match greedy {
                None => true,
                Some((_, best)) if maximizing_player => score > best,
                Some((_, best)) => score < best,
            };
            if is_better {
                greedy = Some((candidate, score));
            }
        }

        let mut context = SearchContext::new(1);
        let chess_move = search_best_move(&mut context, &mut position).unwrap();

        let (greedy_move, greedy_score) = greedy.unwrap();
        assert_eq!(chess_move, greedy_move);
        assert_eq!(context.last_score(), Some(greedy_score));
    }
}

#[test]
fn test_matches_exhaustive_search_from_start() {
    let mut position = Position::starting_position();
    assert_matches_exhaustive(&mut position, 3);
}

#[test]
fn test_matches_exhaustive_search_in_random_positions() {
    let mut rng = StdRng::seed_from_u64(2024);
    for plies in &[4, 9, 14, 19, 24, 31] {
        let mut position = random_position(&mut rng, *plies);
        assert_matches_exhaustive(&mut position, 2);
    }
}

#[test]
fn test_search_prunes_chess_tree() {
    let mut position = Position::starting_position();
    let mut context = SearchContext::new(3);

    search_best_move(&mut context, &mut position).unwrap();

    assert!(context.cutoff_count() > 0);
    // 1 + 20 + 400 + 8902 positions without pruning
    assert!(context.searched_position_count() < 9323);
}

#[test]
fn test_search_is_deterministic_and_legal() {
    let mut position = Position::starting_position();

    let mut context = SearchContext::new(2);
    let first = search_best_move(&mut context, &mut position).unwrap();
    let mut context = SearchContext::new(2);
    let second = search_best_move(&mut context, &mut position).unwrap();

    assert_eq!(first, second);
    assert!(position.is_legal(first));
}

#[test]
fn test_search_leaves_position_unchanged() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut position = random_position(&mut rng, 12);
    let before = position.board().to_string();
    let history_before = position.history_len();
    let clock_before = position.halfmove_clock();

    let mut context = SearchContext::new(3);
    search_best_move(&mut context, &mut position).unwrap();

    assert_eq!(position.board().to_string(), before);
    assert_eq!(position.history_len(), history_before);
    assert_eq!(position.halfmove_clock(), clock_before);
}

#[test]
fn test_no_moves_when_checkmated() {
    let mut position =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    let mut context = SearchContext::new(3);

    assert_eq!(
        search_best_move(&mut context, &mut position),
        Err(SearchError::NoAvailableMoves)
    );
    assert_eq!(
        search_score(&mut context, &mut position, 3).unwrap(),
        BLACK_WINS
    );
}

#[test]
fn test_stalemated_position_scores_material() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut context = SearchContext::new(4);

    assert_eq!(
        search_score(&mut context, &mut position, 4).unwrap(),
        evaluate::score(&position)
    );
    assert_eq!(context.searched_position_count(), 1);
}
