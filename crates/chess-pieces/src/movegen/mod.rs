//! Candidate destination generation.
//!
//! Each function computes the full set of squares one piece of a given kind
//! may move to from a square, asking the board only about occupancy. None of
//! them touch piece or board state; calling twice with the same board
//! answers gives the same set.

mod attacks;
mod pawn;

pub use attacks::{king_steps, knight_jumps};
pub use pawn::pawn_destinations;

use crate::board::BoardQuery;
use crate::rules::{CaptureRule, LegalityRules};
use crate::Bitboard;
use chess_core::{Color, Square};

/// Returns true if a piece of `color` may capture on the occupied `square`.
#[inline]
pub(crate) fn capturable<B: BoardQuery + ?Sized>(
    board: &B,
    color: Color,
    square: Square,
    rules: LegalityRules,
) -> bool {
    match rules.captures {
        CaptureRule::AnyOccupant => true,
        CaptureRule::OpponentOnly => board.occupant(square) != Some(color),
    }
}

/// Keeps the empty squares of `reach` plus the occupied ones that can be
/// captured.
fn filter_landings<B: BoardQuery + ?Sized>(
    reach: Bitboard,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    reach
        .into_iter()
        .filter(|&to| !board.occupied(to) || capturable(board, color, to, rules))
        .collect()
}

/// Walks each ray from `from` until the edge or the first occupied square.
///
/// The blocking square is included when it can be captured; nothing beyond
/// it is.
fn slide<B: BoardQuery + ?Sized>(
    from: Square,
    directions: &[(i8, i8)],
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;

    for &(df, dr) in directions {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            if board.occupied(next) {
                if capturable(board, color, next, rules) {
                    targets.set(next);
                }
                break;
            }
            targets.set(next);
            current = next;
        }
    }

    targets
}

/// Returns the squares a knight on `from` may move to.
pub fn knight_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    filter_landings(knight_jumps(from), color, board, rules)
}

/// Returns the squares a king on `from` may move to. Castling is not
/// generated.
pub fn king_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    filter_landings(king_steps(from), color, board, rules)
}

/// Returns the squares a rook on `from` may move to.
pub fn rook_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    slide(from, &attacks::ORTHOGONAL, color, board, rules)
}

/// Returns the squares a bishop on `from` may move to.
pub fn bishop_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    slide(from, &attacks::DIAGONAL, color, board, rules)
}

/// Returns the squares a queen on `from` may move to.
pub fn queen_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    rook_destinations(from, color, board, rules) | bishop_destinations(from, color, board, rules)
}
