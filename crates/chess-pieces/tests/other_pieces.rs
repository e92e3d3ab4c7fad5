//! Knight, bishop, rook, queen, and king legality through `Piece`.

mod common;

use chess_core::{Color, PieceKind};
use chess_pieces::{Bitboard, EmptyBoard, FullBoard, LegalityRules, Occupancy, Piece};
use common::{sq, RecordingBoard};

fn set(tokens: &[&str]) -> Bitboard {
    tokens.iter().map(|t| sq(t)).collect()
}

#[test]
fn knight_in_the_corner() {
    let knight = Piece::new(&EmptyBoard, PieceKind::Knight, Color::White, sq("h1"));
    assert_eq!(knight.destinations(), set(&["f2", "g3"]));
    assert!(knight.attempt_move("G3"));
    assert!(!knight.attempt_move("H3"));
}

#[test]
fn knight_from_the_starting_square_with_its_own_pawns_in_place() {
    let board = Occupancy::new()
        .with(Color::White, sq("d2"))
        .with(Color::White, sq("e2"));
    let knight = Piece::new(&board, PieceKind::Knight, Color::White, sq("g1"))
        .with_rules(LegalityRules::strict());
    assert_eq!(knight.destinations(), set(&["f3", "h3"]));
}

#[test]
fn bishop_diagonals_are_cut_by_blockers() {
    let board = Occupancy::new()
        .with(Color::White, sq("b2"))
        .with(Color::Black, sq("e5"));
    let bishop = Piece::new(&board, PieceKind::Bishop, Color::White, sq("c3"))
        .with_rules(LegalityRules::strict());
    assert_eq!(bishop.destinations(), set(&["d4", "e5", "b4", "a5", "d2", "e1"]));
}

#[test]
fn rook_slide_stops_at_the_first_occupied_square() {
    let board = RecordingBoard::new(Occupancy::new().with(Color::Black, sq("a4")));
    let rook = Piece::new(&board, PieceKind::Rook, Color::White, sq("a1"));
    let targets = rook.destinations();

    assert!(targets.contains(sq("a4")));
    assert!(!targets.contains(sq("a5")));
    assert!(targets.contains(sq("h1")));
    assert_eq!(targets.count(), 3 + 7);
    assert!(!board.queries().contains(&sq("a5")));
}

#[test]
fn queen_on_an_empty_board() {
    let queen = Piece::new(&EmptyBoard, PieceKind::Queen, Color::Black, sq("d8"));
    assert_eq!(queen.destinations().count(), 7 + 7 + 3 + 4);
    assert!(queen.attempt_move("h4"));
    assert!(queen.attempt_move("a5"));
    assert!(queen.attempt_move("d1"));
    assert!(!queen.attempt_move("e6"));
}

#[test]
fn queen_hemmed_in_on_a_full_board_only_captures_adjacent_squares() {
    let queen = Piece::new(&FullBoard, PieceKind::Queen, Color::White, sq("d1"));
    assert_eq!(queen.destinations(), set(&["c1", "c2", "d2", "e2", "e1"]));
}

#[test]
fn king_steps_one_square_and_never_castles() {
    let king = Piece::new(&EmptyBoard, PieceKind::King, Color::White, sq("e1"));
    assert_eq!(king.destinations(), set(&["d1", "d2", "e2", "f2", "f1"]));
    assert!(!king.attempt_move("g1"));
    assert!(!king.attempt_move("c1"));
}

#[test]
fn king_may_take_an_enemy_but_not_a_friend_under_strict_rules() {
    let board = Occupancy::new()
        .with(Color::Black, sq("d5"))
        .with(Color::White, sq("e5"));
    let king = Piece::new(&board, PieceKind::King, Color::White, sq("e4"))
        .with_rules(LegalityRules::strict());
    assert!(king.attempt_move("d5"));
    assert!(!king.attempt_move("e5"));
}

#[test]
fn pieces_on_the_same_board_do_not_affect_each_other() {
    let board = Occupancy::new();
    let mut rook = Piece::new(&board, PieceKind::Rook, Color::White, sq("a1"));
    let bishop = Piece::new(&board, PieceKind::Bishop, Color::White, sq("c1"));

    let before = bishop.destinations();
    rook.place(sq("h8"));
    rook.capture();
    assert_eq!(bishop.destinations(), before);
    assert!(rook.destinations().is_empty());
}
