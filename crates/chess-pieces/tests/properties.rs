//! Property tests over every piece kind, color, and origin square.

mod common;

use chess_core::{Color, PieceKind, Square};
use chess_pieces::{AdvanceRule, Bitboard, CaptureRule, LegalityRules, Occupancy, Piece};
use common::RecordingBoard;
use proptest::prelude::*;

fn any_square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    proptest::sample::select(PieceKind::ALL.to_vec())
}

fn any_rules() -> impl Strategy<Value = LegalityRules> {
    (
        prop_oneof![Just(AdvanceRule::Unconditional), Just(AdvanceRule::RequireEmpty)],
        prop_oneof![Just(CaptureRule::AnyOccupant), Just(CaptureRule::OpponentOnly)],
    )
        .prop_map(|(pawn_advance, captures)| LegalityRules {
            pawn_advance,
            captures,
        })
}

/// A board with disjoint white and black occupancy.
fn any_board() -> impl Strategy<Value = Occupancy> {
    (any::<u64>(), any::<u64>()).prop_map(|(white, black)| {
        let mut board = Occupancy::new();
        for s in Bitboard(white) {
            board.place(Color::White, s);
        }
        for s in Bitboard(black & !white) {
            board.place(Color::Black, s);
        }
        board
    })
}

proptest! {
    #[test]
    fn legality_is_idempotent_and_side_effect_free(
        kind in any_kind(),
        color in any_color(),
        from in any_square(),
        target in any_square(),
        has_moved in any::<bool>(),
        rules in any_rules(),
        occupancy in any_board(),
    ) {
        let board = RecordingBoard::new(occupancy);
        let mut piece = Piece::new(&board, kind, color, from).with_rules(rules);
        piece.set_has_moved(has_moved);
        let state = piece.state();

        let first = piece.attempt_move_to(target);
        let first_queries = board.queries();
        board.reset();
        let second = piece.attempt_move_to(target);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_queries, board.queries());
        prop_assert_eq!(piece.square(), from);
        prop_assert_eq!(piece.color(), color);
        prop_assert_eq!(piece.state(), state);
        prop_assert!(piece.is_active());
    }

    #[test]
    fn a_piece_never_moves_onto_its_own_square(
        kind in any_kind(),
        color in any_color(),
        from in any_square(),
        rules in any_rules(),
        occupancy in any_board(),
    ) {
        let piece = Piece::new(&occupancy, kind, color, from).with_rules(rules);
        prop_assert!(!piece.destinations().contains(from));
    }

    #[test]
    fn string_and_square_targets_agree(
        kind in any_kind(),
        color in any_color(),
        from in any_square(),
        target in any_square(),
        occupancy in any_board(),
    ) {
        let piece = Piece::new(&occupancy, kind, color, from);
        let upper = target.to_string().to_uppercase();
        prop_assert_eq!(piece.attempt_move(&target.to_string()), piece.attempt_move_to(target));
        prop_assert_eq!(piece.attempt_move(&upper), piece.attempt_move_to(target));
    }

    #[test]
    fn strict_rules_never_land_on_a_friendly_piece(
        kind in any_kind(),
        color in any_color(),
        from in any_square(),
        occupancy in any_board(),
    ) {
        let piece = Piece::new(&occupancy, kind, color, from).with_rules(LegalityRules::strict());
        let friendly = occupancy.pieces(color);
        prop_assert!((piece.destinations() & friendly).is_empty());
    }

    #[test]
    fn strict_rules_only_shrink_the_candidate_set(
        kind in any_kind(),
        color in any_color(),
        from in any_square(),
        occupancy in any_board(),
    ) {
        let permissive = Piece::new(&occupancy, kind, color, from);
        let strict = permissive.clone().with_rules(LegalityRules::strict());
        let extra = strict.destinations() & !permissive.destinations();
        prop_assert!(extra.is_empty());
    }
}
