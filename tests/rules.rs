use linechess::board::{Board, BoardError, Color, DrawReason, GameResult, GameState, Move, MoveError, PieceKind};
use linechess::search::Solvable;
use linechess::Outcome;
use pretty_assertions::assert_eq;

fn state(layout: &str, to_move: Color) -> GameState {
    GameState::new(layout.parse::<Board>().expect("valid layout"), to_move).expect("valid position")
}

fn find(s: &GameState, name: &str) -> Move {
    *s.moves().iter().find(|m| m.to_string() == name).unwrap_or_else(|| panic!("{name} not legal in {}", s.board()))
}

#[test]
fn no_moves_in_check_is_mate_for_the_other_side() {
    let s = state("K.r....k", Color::White);
    assert!(s.moves().is_empty());
    assert!(s.in_check());
    assert!(s.is_mate());
    assert_eq!(s.winner(), Some(Color::Black));
    assert_eq!(s.outcome(), Some(Outcome::BlackWins));

    let s = state("K.R....k", Color::Black);
    assert_eq!(s.result(), GameResult::Mate { winner: Color::White });
    assert_eq!(s.outcome(), Some(Outcome::WhiteWins));
}

#[test]
fn no_moves_without_check_is_stalemate() {
    let s = state("K..n...k", Color::White);
    assert!(s.moves().is_empty());
    assert!(!s.in_check());
    assert_eq!(s.result(), GameResult::Draw(DrawReason::Stalemate));
    assert_eq!(s.outcome(), Some(Outcome::Draw));
}

#[test]
fn bare_kings_are_drawn_even_with_moves_left() {
    let s = state("K......k", Color::White);
    assert_eq!(s.moves().len(), 1);
    assert_eq!(s.result(), GameResult::Draw(DrawReason::InsufficientMaterial));
}

#[test]
fn third_occurrence_of_a_board_is_a_draw() {
    let mut s = GameState::standard(8).unwrap();
    // knights out and back for both sides
    let cycle = ["N4", "N5", "N2", "N7"];
    let mut counts = Vec::new();
    for _ in 0..2 {
        for name in cycle {
            let mv = find(&s, name);
            s.play(mv).expect("legal move");
            counts.push(s.repetition_count());
        }
    }
    assert_eq!(counts, vec![1, 1, 1, 2, 2, 2, 2, 3]);
    assert_eq!(s.board().to_string(), "KNR..rnk");
    assert_eq!(s.result(), GameResult::Draw(DrawReason::Repetition));
    assert_eq!(s.outcome(), Some(Outcome::Draw));
    assert_eq!(s.history().len(), 8);
}

#[test]
fn moves_exposing_the_king_are_not_generated() {
    // the knight shields its king from the rook; jumping past the rook would expose it
    let s = state("K..Nr..k", Color::White);
    assert!(!s.in_check());
    let names: Vec<String> = s.moves().iter().map(|m| m.to_string()).collect();
    assert_eq!(names, vec!["K2", "N2"]);
}

#[test]
fn play_rejects_illegal_and_late_moves() {
    let mut s = GameState::standard(8).unwrap();
    let bogus = Move { from: 0, to: 1, piece: PieceKind::King };
    assert_eq!(s.play(bogus), Err(MoveError::Illegal(bogus)));

    let mut mated = state("K.r....k", Color::White);
    assert_eq!(mated.play(bogus), Err(MoveError::GameOver));

    let r6 = find(&s, "R6");
    s.play(r6).unwrap();
    assert_eq!(s.board().to_string(), "KN...Rnk");
    assert_eq!(s.to_move(), Color::Black);
}

#[test]
fn position_with_the_waiting_side_in_check_is_rejected() {
    let board: Board = "K.R....k".parse().unwrap();
    assert_eq!(GameState::new(board, Color::White).err(), Some(BoardError::OpponentInCheck(Color::Black)));
}
