use std::fmt;

use super::side::Side;

/// Why a game has ended. Only `Checkmate` has a winner; the rest are draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
}

impl GameEnding {
    /// PGN-style result string. `side_to_move` is the side that would move in the final
    /// position, i.e. the mated side for a checkmate.
    pub fn result(&self, side_to_move: Side) -> &'static str {
        match (self, side_to_move) {
            (GameEnding::Checkmate, Side::Black) => "1-0",
            (GameEnding::Checkmate, Side::White) => "0-1",
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ending = match self {
            GameEnding::Checkmate => "checkmate",
            GameEnding::Stalemate => "stalemate",
            GameEnding::InsufficientMaterial => "insufficient material",
            GameEnding::SeventyFiveMoveRule => "seventy-five move rule",
            GameEnding::FivefoldRepetition => "fivefold repetition",
        };
        write!(f, "{}", ending)
    }
}
