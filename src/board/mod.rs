// Rules engine for chess on a single line of squares
pub mod line;
pub mod state;

pub use line::{Board, BoardError, Piece, PieceKind, MAX_SQUARES, MIN_SQUARES, STANDARD_SQUARES};
pub use state::{DrawReason, GameResult, GameState, Move, MoveError};

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::White => write!(f, "White"), Color::Black => write!(f, "Black") }
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(BoardError::UnknownColor(s.to_string())),
        }
    }
}
