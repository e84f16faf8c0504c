// One-dimensional chess solver: rules engine, position encoder, packed table and minimax tree
pub mod board;
pub mod console;
pub mod perft;
pub mod search;

pub use board::{Board, Color, GameState, Move};
pub use search::eval::Outcome;
pub use search::solver::{LineSolver, Solver, SolverConfig, SolveStats};
