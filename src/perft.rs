use crate::board::GameState;

// Move-path count to `depth`, cloning per child; finished games end their path
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if state.is_game_over() { return 0; }
    let mut nodes = 0u64;
    for &mv in state.moves() {
        let child = state.after(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

// Per-root-move counts, in move order
pub fn divide(state: &GameState, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 || state.is_game_over() { return Vec::new(); }
    state.moves().iter().map(|&mv| (mv.to_string(), perft(&state.after(mv), depth - 1))).collect()
}
