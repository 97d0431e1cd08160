use std::fmt;

use chess::Piece;

use super::side::Side;
use super::Position;

pub fn piece_char(piece: Piece, side: Side) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match side {
        Side::White => c.to_ascii_uppercase(),
        Side::Black => c,
    }
}

/// Renders the board from White's side: rank 8 on top, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| {
                    let square = rank * 8 + file;
                    self.piece_at(square)
                        .map_or('.', |(piece, side)| piece_char(piece, side))
                        .to_string()
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.board().to_string())
            .field("halfmove_clock", &self.halfmove_clock())
            .field("history_len", &self.history_len())
            .finish()
    }
}
