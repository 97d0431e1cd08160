use chess::ALL_SQUARES;

use crate::board::side::Side;
use crate::board::Position;

use self::evaluation_tables::{bonus_table, material_value};

mod evaluation_tables;

// Larger in magnitude than any reachable material score.
pub const BLACK_WINS: i16 = -9999;
pub const WHITE_WINS: i16 = 9999;

/// Returns the score of the position from White's perspective.
///
/// Only checkmate is special-cased. Stalemate and the other draws are scored by
/// material like any other position.
#[inline(always)]
pub fn score(position: &Position) -> i16 {
    if position.is_checkmate() {
        return match position.side_to_move() {
            Side::White => BLACK_WINS,
            Side::Black => WHITE_WINS,
        };
    }

    board_material_score(position)
}

#[inline(always)]
pub fn board_material_score(position: &Position) -> i16 {
    let mut material = 0;

    for square in ALL_SQUARES.iter().map(|square| square.to_index()) {
        let (piece, side) = match position.piece_at(square) {
            Some(occupant) => occupant,
            None => continue,
        };

        // Both sides share the bonus tables; black looks them up rank-flipped.
        let bonus = bonus_table(piece)[bonus_index(square, side)];
        let value = material_value(piece) + bonus;

        match side {
            Side::White => material += value,
            Side::Black => material -= value,
        }
    }

    material
}

#[inline(always)]
fn bonus_index(square: usize, side: Side) -> usize {
    match side {
        Side::White => square,
        Side::Black => square ^ 56,
    }
}
