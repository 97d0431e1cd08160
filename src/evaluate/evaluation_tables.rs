use chess::Piece;

/// Material values in coarse units; the king's value dwarfs everything else so trading
/// it is never considered.
pub const fn material_value(piece: Piece) -> i16 {
    match piece {
        Piece::Pawn => 10,
        Piece::Knight => 30,
        Piece::Bishop => 30,
        Piece::Rook => 50,
        Piece::Queen => 90,
        Piece::King => 900,
    }
}

pub fn bonus_table(piece: Piece) -> &'static [i16; 64] {
    match piece {
        Piece::Pawn => &PAWN_BONUSES,
        Piece::Knight => &KNIGHT_BONUSES,
        Piece::Bishop => &BISHOP_BONUSES,
        Piece::Rook => &ROOK_BONUSES,
        Piece::Queen => &QUEEN_BONUSES,
        Piece::King => &KING_BONUSES,
    }
}

// The tables below are laid out from White's side with a1 at index 0, so the first
// row printed is the first rank. Black looks them up through the rank-flipped square.

#[rustfmt::skip]
static PAWN_BONUSES: [i16; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
     5, 10,  10, -20, -20,  10, 10,  5,
     5, -5, -10,   0,   0, -10, -5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5,  5,  10,  25,  25,  10,  5,  5,
    10, 10,  20,  30,  30,  20, 10, 10,
    50, 50,  50,  50,  50,  50, 50, 50,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
static KNIGHT_BONUSES: [i16; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
static BISHOP_BONUSES: [i16; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
static ROOK_BONUSES: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
static QUEEN_BONUSES: [i16; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20,
    -10,   0,   0,  0,  0,   0,   0, -10,
    -10,   0,   5,  5,  5,   5,   0, -10,
     -5,   0,   5,  5,  5,   5,   0,  -5,
      0,   0,   5,  5,  5,   5,   0,  -5,
    -10,   5,   5,  5,  5,   5,   0, -10,
    -10,   0,   5,  0,  0,   0,   0, -10,
    -20, -10, -10, -5, -5, -10, -10, -20,
];

#[rustfmt::skip]
static KING_BONUSES: [i16; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];
