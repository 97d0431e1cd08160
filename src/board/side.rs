use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// White carries the "maximizing" label: positive scores favor it.
    pub fn maximize_score(&self) -> bool {
        match self {
            Side::White => true,
            Side::Black => false,
        }
    }

    /// A coin flip, for `--color random`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Side::White
        } else {
            Side::Black
        }
    }
}

impl From<chess::Color> for Side {
    fn from(color: chess::Color) -> Self {
        match color {
            chess::Color::White => Side::White,
            chess::Color::Black => Side::Black,
        }
    }
}

impl From<Side> for chess::Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => chess::Color::White,
            Side::Black => chess::Color::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Black => "black",
            Side::White => "white",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            "random" => Ok(Side::random(&mut rand::thread_rng())),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}
