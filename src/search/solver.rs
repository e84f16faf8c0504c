use super::encoder::PositionEncoder;
use super::eval::Outcome;
use super::tree::{NodeId, SearchTree};
use super::tt::PackedTable;
use super::{Solvable, StateEncoder};
use crate::board::{Color, GameState};
use log::{debug, info, trace};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SolverConfig {
    /// Keep the explicit node tree after `evaluate` returns.
    pub retain_tree: bool,
    /// Track subtree sizes per index so cache hits can report the nodes they saved.
    pub record_savings: bool,
}

impl Default for SolverConfig {
    fn default() -> Self { Self { retain_tree: true, record_savings: true } }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SolveStats {
    /// Nodes in the tree built by the last `evaluate`, root included.
    pub nodes: u64,
    /// Deepest ply at which a terminal position was reached.
    pub highest_depth: u32,
    pub cache_hits: u64,
    /// Sum over cache hits of the subtree size first explored for that index.
    pub nodes_saved: u64,
    pub entries_written: u64,
}

/// Exhaustive minimax over every line of play, memoised in a packed table.
/// Ply parity decides the mover: with White to move at the root, White maximises
/// at even plies and Black minimises at odd plies; a Black root shifts both by one.
pub struct Solver<S: Solvable, E: StateEncoder<S>> {
    encoder: E,
    table: PackedTable,
    savings: Vec<u32>,
    tree: Option<SearchTree<S::Move>>,
    stats: SolveStats,
    config: SolverConfig,
    // 0 when White moves at the root, 1 when Black does
    root_parity: u32,
    _state: PhantomData<fn() -> S>,
}

pub type LineSolver = Solver<GameState, PositionEncoder>;

impl LineSolver {
    /// Solver sized for positions reachable from `state`.
    pub fn for_state(state: &GameState) -> Self {
        Self::new(PositionEncoder::for_board(state.board()))
    }
}

impl<S: Solvable, E: StateEncoder<S>> Solver<S, E> {
    pub fn new(encoder: E) -> Self { Self::with_config(encoder, SolverConfig::default()) }

    pub fn with_config(encoder: E, config: SolverConfig) -> Self {
        let capacity = encoder.capacity();
        let savings = if config.record_savings { vec![0u32; capacity] } else { Vec::new() };
        Self {
            encoder,
            table: PackedTable::new(capacity),
            savings,
            tree: None,
            stats: SolveStats::default(),
            config,
            root_parity: 0,
            _state: PhantomData,
        }
    }

    pub fn encoder(&self) -> &E { &self.encoder }
    pub fn table(&self) -> &PackedTable { &self.table }
    pub fn config(&self) -> SolverConfig { self.config }

    /// Statistics of the most recent `evaluate` call.
    pub fn stats(&self) -> &SolveStats { &self.stats }

    pub fn tree(&self) -> Option<&SearchTree<S::Move>> { self.tree.as_ref() }
    pub fn take_tree(&mut self) -> Option<SearchTree<S::Move>> { self.tree.take() }

    /// Forget every solved value.
    pub fn reset(&mut self) {
        self.table.clear();
        self.savings.iter_mut().for_each(|s| *s = 0);
        self.tree = None;
        self.stats = SolveStats::default();
    }

    /// Exact value of `root`, solving every position below it that is not already in the table.
    pub fn evaluate(&mut self, root: &S) -> Outcome {
        self.stats = SolveStats::default();
        self.root_parity = match root.to_move() { Color::White => 0, Color::Black => 1 };
        let mut tree = SearchTree::new();
        let root_id = tree.root();
        let value = self.evaluate_node(root, &mut tree, root_id);
        tree.node_mut(root_id).value = value;
        self.stats.nodes = tree.len() as u64;
        info!(
            "solved: value {} nodes {} highest depth {} cache hits {} nodes saved {}",
            value, self.stats.nodes, self.stats.highest_depth, self.stats.cache_hits, self.stats.nodes_saved
        );
        self.tree = if self.config.retain_tree { Some(tree) } else { None };
        value
    }

    fn evaluate_node(&mut self, state: &S, tree: &mut SearchTree<S::Move>, id: NodeId) -> Outcome {
        let depth = tree.node(id).depth;
        if let Some(outcome) = state.outcome() {
            self.stats.highest_depth = self.stats.highest_depth.max(depth);
            return outcome;
        }

        let index = self.encoder.encode(state);
        if let Some(cached) = self.table.get(index) {
            self.stats.cache_hits += 1;
            if self.config.record_savings { self.stats.nodes_saved += self.savings[index] as u64; }
            debug!("{:indent$}cache hit at ply {depth}: index {index} value {cached}", "", indent = depth as usize * 2);
            return cached;
        }

        let maximize = (depth + self.root_parity) % 2 == 0;
        let mut best: Option<Outcome> = None;
        for &mv in state.moves() {
            let child_state = state.after(mv);
            let child = tree.add_child(id, mv);
            trace!("{:indent$}ply {}. {mv}", "", depth + 1, indent = depth as usize * 2);
            let value = self.evaluate_node(&child_state, tree, child);
            tree.node_mut(child).value = value;
            trace!("{:indent$}ply {}. {mv} has value {value}", "", depth + 1, indent = depth as usize * 2);
            best = Some(match best {
                None => value,
                Some(b) if maximize => b.max(value),
                Some(b) => b.min(value),
            });
        }
        let Some(value) = best else { panic!("position at ply {depth} is not over but has no legal moves") };

        self.table.set(index, value);
        self.stats.entries_written += 1;
        if self.config.record_savings {
            // the subtree just built is the contiguous run after `id`
            let explored = tree.len() - id.index() - 1;
            self.savings[index] = explored.min(u32::MAX as usize) as u32;
        }
        value
    }

    /// Stored value of `state`, `None` if no `evaluate` call reached it.
    pub fn cached_outcome(&self, state: &S) -> Option<Outcome> {
        self.table.get(self.encoder.encode(state))
    }

    /// Terminal result if the game is over, otherwise the stored value.
    pub fn known_outcome(&self, state: &S) -> Option<Outcome> {
        state.outcome().or_else(|| self.cached_outcome(state))
    }

    /// Legal moves leading to the best known value for the side to move.
    pub fn best_moves(&self, state: &S) -> Vec<S::Move> {
        let side = state.to_move();
        let scored: Vec<(S::Move, Outcome)> = state
            .moves()
            .iter()
            .filter_map(|&mv| self.known_outcome(&state.after(mv)).map(|o| (mv, o)))
            .collect();
        let Some(best) = scored.iter().map(|&(_, o)| o).reduce(|a, b| Outcome::best_for(side, a, b)) else {
            return Vec::new();
        };
        scored.into_iter().filter(|&(_, o)| o == best).map(|(mv, _)| mv).collect()
    }
}
