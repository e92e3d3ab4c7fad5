//! Pawn candidate generation.

use super::capturable;
use crate::board::BoardQuery;
use crate::rules::{AdvanceRule, LegalityRules};
use crate::Bitboard;
use chess_core::{Color, Square};

/// Returns the squares a pawn on `from` may move to.
///
/// Straight advances are one step, or one and two steps before the pawn's
/// first move. Whether they need empty squares depends on
/// [`LegalityRules::pawn_advance`]. The two forward diagonals are included
/// only when the board reports them occupied and the capture rule allows it.
/// Squares off the board are never built, so a pawn on the a-file never asks
/// about a file to its left.
pub fn pawn_destinations<B: BoardQuery + ?Sized>(
    from: Square,
    color: Color,
    has_moved: bool,
    board: &B,
    rules: LegalityRules,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let dir = color.pawn_direction();

    if let Some(single) = from.offset(0, dir) {
        let single_open = match rules.pawn_advance {
            AdvanceRule::Unconditional => true,
            AdvanceRule::RequireEmpty => !board.occupied(single),
        };
        if single_open {
            targets.set(single);
        }

        if !has_moved {
            if let Some(double) = from.offset(0, 2 * dir) {
                let double_open = match rules.pawn_advance {
                    AdvanceRule::Unconditional => true,
                    AdvanceRule::RequireEmpty => single_open && !board.occupied(double),
                };
                if double_open {
                    targets.set(double);
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(diagonal) = from.offset(df, dir) {
            if board.occupied(diagonal) && capturable(board, color, diagonal, rules) {
                targets.set(diagonal);
            }
        }
    }

    targets
}
