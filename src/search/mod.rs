pub mod encoder;
pub mod eval;
pub mod solver;
pub mod tree;
pub mod tt;

use crate::board::Color;
use eval::Outcome;

/// What the solver needs from a game state.
pub trait Solvable: Clone {
    type Move: Copy + PartialEq + std::fmt::Debug + std::fmt::Display;

    /// Final result if the game is over, `None` while moves remain to be played.
    fn outcome(&self) -> Option<Outcome>;
    /// Legal moves in generation order. Non-empty whenever `outcome` is `None`.
    fn moves(&self) -> &[Self::Move];
    /// Copy of the state with `mv` applied and derived data recomputed.
    fn after(&self, mv: Self::Move) -> Self;
    fn to_move(&self) -> Color;
}

/// Dense index of a state inside `0..capacity()`.
pub trait StateEncoder<S> {
    fn capacity(&self) -> usize;
    fn encode(&self, state: &S) -> usize;
}
