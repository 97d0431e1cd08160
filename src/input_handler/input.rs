//! Move input parsing and validation.

use std::io::BufRead;
use std::str::FromStr;

use chess::{Piece, Square};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])([a-h][1-8])([nbrq])?$").expect("COORD_RE regex should be valid")
});

const QUIT: &str = "quit";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

/// A line entered by the human player.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveInput {
    /// A move in coordinate form, e.g. `e2e4` or `e7e8q`.
    Coordinate {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    Quit,
}

fn promotion_piece(letter: &str) -> Option<Piece> {
    match letter {
        "n" => Some(Piece::Knight),
        "b" => Some(Piece::Bishop),
        "r" => Some(Piece::Rook),
        "q" => Some(Piece::Queen),
        _ => None,
    }
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == QUIT {
            return Ok(MoveInput::Quit);
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = COORD_RE.captures(input).ok_or_else(invalid)?;
        let from = Square::from_str(&caps[1]).map_err(|_| invalid())?;
        let to = Square::from_str(&caps[2]).map_err(|_| invalid())?;
        let promotion = caps.get(3).and_then(|m| promotion_piece(m.as_str()));

        Ok(MoveInput::Coordinate {
            from,
            to,
            promotion,
        })
    }
}

/// Reads one line and parses it. End of input counts as `quit`.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Ok(MoveInput::Quit);
    }

    line.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            "e2e4".parse::<MoveInput>().unwrap(),
            MoveInput::Coordinate {
                from: Square::E2,
                to: Square::E4,
                promotion: None,
            }
        );
    }

    #[test]
    fn test_parse_promotion() {
        assert_eq!(
            "a7a8n".parse::<MoveInput>().unwrap(),
            MoveInput::Coordinate {
                from: Square::A7,
                to: Square::A8,
                promotion: Some(Piece::Knight),
            }
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("quit".parse::<MoveInput>().unwrap(), MoveInput::Quit);
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in &["", "e2", "e2e9", "i2i4", "E2E4", "e2e4k", "Nf3", "e2 e4"] {
            assert_eq!(
                input.parse::<MoveInput>(),
                Err(InputError::InvalidInput {
                    input: input.to_string()
                }),
                "{:?} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_read_trims_whitespace() {
        let mut reader = Cursor::new("  g1f3 \n");
        assert_eq!(
            read_move_input(&mut reader).unwrap(),
            MoveInput::Coordinate {
                from: Square::G1,
                to: Square::F3,
                promotion: None,
            }
        );
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_move_input(&mut reader).unwrap(), MoveInput::Quit);
    }
}
