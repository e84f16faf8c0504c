use linechess::board::GameState;
use linechess::perft::{divide, perft};

#[test]
fn perft_standard_small_depths() {
    let s = GameState::standard(8).unwrap();
    assert_eq!(perft(&s, 1), 4);
    assert_eq!(perft(&s, 2), 8);
    assert_eq!(perft(&s, 3), 18);
    assert_eq!(perft(&s, 4), 49);
    assert_eq!(perft(&s, 5), 118);
}

#[test]
fn perft_stops_at_finished_games() {
    // on seven squares some lines run into kings-only draws before ply 7
    let s = GameState::standard(7).unwrap();
    assert_eq!(perft(&s, 6), 54);
    assert_eq!(perft(&s, 7), 84);
}

#[test]
fn perft_longer_board() {
    let s = GameState::standard(10).unwrap();
    assert_eq!(perft(&s, 4), 229);
}

#[test]
fn divide_lists_root_moves_in_order() {
    let s = GameState::standard(8).unwrap();
    let d = divide(&s, 1);
    let names: Vec<&str> = d.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(names, vec!["N4", "R4", "R5", "R6"]);
    assert!(d.iter().all(|&(_, n)| n == 1));
}
