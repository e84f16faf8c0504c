use super::line::{Board, BoardError, PieceKind};
use super::Color;
use crate::search::eval::Outcome;
use crate::search::Solvable;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8,
    pub to: u8,
    pub piece: PieceKind,
}

impl fmt::Display for Move {
    // Piece letter and 1-based target square, e.g. R5
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.letter(), self.to + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("illegal move {0}")]
    Illegal(Move),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    Repetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Mate { winner: Color },
    Draw(DrawReason),
}

/// Board, side to move and the boards seen so far in this game.
/// Derived data (legal moves, check, result) is refreshed after every move.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    to_move: Color,
    history: Vec<Board>,
    moves: Vec<Move>,
    in_check: bool,
    repetitions: u8,
    result: GameResult,
}

impl GameState {
    pub fn new(board: Board, to_move: Color) -> Result<Self, BoardError> {
        if board.is_king_attacked(to_move.opponent()) {
            return Err(BoardError::OpponentInCheck(to_move.opponent()));
        }
        let mut state = Self {
            board,
            to_move,
            history: Vec::new(),
            moves: Vec::new(),
            in_check: false,
            repetitions: 1,
            result: GameResult::Ongoing,
        };
        state.refresh();
        Ok(state)
    }

    pub fn standard(len: usize) -> Result<Self, BoardError> {
        Self::new(Board::standard(len)?, Color::White)
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn to_move(&self) -> Color { self.to_move }
    pub fn history(&self) -> &[Board] { &self.history }
    pub fn moves(&self) -> &[Move] { &self.moves }
    pub fn in_check(&self) -> bool { self.in_check }
    pub fn result(&self) -> GameResult { self.result }

    /// Occurrences of the current board in this game, counting the current one.
    pub fn repetition_count(&self) -> u8 { self.repetitions }

    pub fn is_game_over(&self) -> bool { self.result != GameResult::Ongoing }
    pub fn is_mate(&self) -> bool { matches!(self.result, GameResult::Mate { .. }) }
    pub fn is_draw(&self) -> bool { matches!(self.result, GameResult::Draw(_)) }

    pub fn winner(&self) -> Option<Color> {
        match self.result { GameResult::Mate { winner } => Some(winner), _ => None }
    }

    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_game_over() { return Err(MoveError::GameOver); }
        if !self.moves.contains(&mv) { return Err(MoveError::Illegal(mv)); }
        self.play_unchecked(mv);
        Ok(())
    }

    pub fn play_unchecked(&mut self, mv: Move) {
        self.history.push(self.board);
        self.board = self.board.moved(mv.from as usize, mv.to as usize);
        self.to_move = self.to_move.opponent();
        self.refresh();
    }

    /// Copy of this state with `mv` applied.
    pub fn after(&self, mv: Move) -> Self {
        let mut child = self.clone();
        child.play_unchecked(mv);
        child
    }

    fn refresh(&mut self) {
        self.moves = self.legal_moves();
        self.in_check = self.board.is_king_attacked(self.to_move);
        let seen = self.history.iter().filter(|b| **b == self.board).count();
        self.repetitions = (1 + seen).min(u8::MAX as usize) as u8;
        self.result = if self.moves.is_empty() {
            if self.in_check { GameResult::Mate { winner: self.to_move.opponent() } } else { GameResult::Draw(DrawReason::Stalemate) }
        } else if self.board.non_king_count() == 0 {
            GameResult::Draw(DrawReason::InsufficientMaterial)
        } else if self.repetitions >= 3 {
            GameResult::Draw(DrawReason::Repetition)
        } else {
            GameResult::Ongoing
        };
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let us = self.to_move;
        for (from, piece) in self.board.pieces() {
            if piece.color != us { continue; }
            for to in self.board.targets(from) {
                let next = self.board.moved(from, to);
                // both kings stay on the board and ours is not left attacked
                if next.king(us.opponent()).is_none() || next.is_king_attacked(us) { continue; }
                moves.push(Move { from: from as u8, to: to as u8, piece: piece.kind });
            }
        }
        moves
    }
}

impl Solvable for GameState {
    type Move = Move;

    fn outcome(&self) -> Option<Outcome> {
        match self.result {
            GameResult::Ongoing => None,
            GameResult::Mate { winner } => Some(Outcome::win_for(winner)),
            GameResult::Draw(_) => Some(Outcome::Draw),
        }
    }

    fn moves(&self) -> &[Move] { &self.moves }

    fn after(&self, mv: Move) -> Self { GameState::after(self, mv) }

    fn to_move(&self) -> Color { self.to_move }
}
