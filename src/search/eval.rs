use crate::board::Color;
use std::fmt;
use thiserror::Error;

// Ordered from Black's best to White's best so max/min follow the players' preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    BlackWins,
    Draw,
    WhiteWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score {0} is not one of -1, 0, 1")]
pub struct OutcomeError(pub i32);

// Score scale of a solved position: +1 white wins, 0 draw, -1 black wins
pub const WIN_SCORE: i8 = 1;
pub const DRAW_SCORE: i8 = 0;
pub const LOSS_SCORE: i8 = -1;

impl Outcome {
    pub fn win_for(color: Color) -> Self {
        match color { Color::White => Outcome::WhiteWins, Color::Black => Outcome::BlackWins }
    }

    pub fn score(self) -> i8 {
        match self { Outcome::WhiteWins => WIN_SCORE, Outcome::Draw => DRAW_SCORE, Outcome::BlackWins => LOSS_SCORE }
    }

    /// Preferred of two outcomes for `color`.
    pub fn best_for(color: Color, a: Self, b: Self) -> Self {
        match color { Color::White => a.max(b), Color::Black => a.min(b) }
    }
}

impl TryFrom<i32> for Outcome {
    type Error = OutcomeError;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        match score {
            1 => Ok(Outcome::WhiteWins),
            0 => Ok(Outcome::Draw),
            -1 => Ok(Outcome::BlackWins),
            other => Err(OutcomeError(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}

/// Console label for a possibly unknown evaluation.
pub fn label(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::WhiteWins) => "1",
        Some(Outcome::Draw) => "0",
        Some(Outcome::BlackWins) => "-1",
        None => "?",
    }
}
