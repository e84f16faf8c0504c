use std::io::{self, BufRead, Write};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::board::{Color, DrawReason, GameResult, GameState};
use crate::search::eval::label;
use crate::search::solver::LineSolver;

/// Text front end: shows the position with solved values and reads moves by number.
pub struct Console<'a> {
    state: GameState,
    solver: &'a LineSolver,
    engine: Option<Color>,
    rng: SmallRng,
}

impl<'a> Console<'a> {
    pub fn new(state: GameState, solver: &'a LineSolver) -> Self {
        Self { state, solver, engine: None, rng: SmallRng::seed_from_u64(0) }
    }

    /// Let the solver play `side`, picking among equally good moves with `seed`.
    pub fn with_engine(mut self, side: Color, seed: u64) -> Self {
        self.engine = Some(side);
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn state(&self) -> &GameState { &self.state }

    fn eval_label(&self, state: &GameState) -> &'static str {
        label(self.solver.known_outcome(state))
    }

    fn print_position<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "------------------------------------")?;
        writeln!(out, "{}", self.state.board())?;
        writeln!(out, "Eval: {}", self.eval_label(&self.state))?;
        Ok(())
    }

    fn print_result<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Game over!")?;
        match self.state.result() {
            GameResult::Mate { winner } => {
                writeln!(out, "Mate!")?;
                writeln!(out, "{winner} wins!")?;
            }
            GameResult::Draw(reason) => {
                let why = match reason {
                    DrawReason::Stalemate => "stalemate",
                    DrawReason::InsufficientMaterial => "insufficient material",
                    DrawReason::Repetition => "threefold repetition",
                };
                writeln!(out, "Draw by {why}!")?;
            }
            GameResult::Ongoing => {}
        }
        Ok(())
    }

    fn engine_move(&mut self) -> Option<crate::board::Move> {
        let best = self.solver.best_moves(&self.state);
        let pool = if best.is_empty() { self.state.moves().to_vec() } else { best };
        if pool.is_empty() { return None; }
        Some(pool[self.rng.gen_range(0..pool.len())])
    }

    /// Runs until the game ends, input is exhausted or `q` is entered.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<GameResult> {
        let mut lines = input.lines();
        loop {
            self.print_position(out)?;
            if self.state.is_game_over() {
                self.print_result(out)?;
                break;
            }

            if self.engine == Some(self.state.to_move()) {
                if let Some(mv) = self.engine_move() {
                    writeln!(out, "Engine plays: {mv}")?;
                    self.state.play_unchecked(mv);
                }
                continue;
            }

            let moves = self.state.moves().to_vec();
            for (i, &mv) in moves.iter().enumerate() {
                let next = self.state.after(mv);
                writeln!(out, "{}: {} ({})", i + 1, mv, self.eval_label(&next))?;
            }
            write!(out, "Please enter the number of the move you want to make: ")?;
            out.flush()?;

            let line = match lines.next() { Some(l) => l?, None => break };
            let line = line.trim();
            if line == "q" { break; }
            match line.parse::<usize>() {
                Ok(n) if n >= 1 && n <= moves.len() => {
                    if let Err(e) = self.state.play(moves[n - 1]) { writeln!(out, "{e}")?; }
                }
                _ => writeln!(out, "Invalid move!")?,
            }
        }
        Ok(self.state.result())
    }
}
