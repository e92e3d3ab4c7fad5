//! Fixed-offset jump tables and sliding rays.

use crate::Bitboard;
use chess_core::Square;

/// Knight jumps as (file delta, rank delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King steps as (file delta, rank delta).
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Rook ray directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop ray directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Precomputed knight targets per square.
const KNIGHT_JUMPS: [Bitboard; 64] = compute_jumps(&KNIGHT_OFFSETS);

/// Precomputed king targets per square.
const KING_STEPS: [Bitboard; 64] = compute_jumps(&KING_OFFSETS);

/// Returns the on-board squares a knight on `sq` can jump to.
#[inline]
pub fn knight_jumps(sq: Square) -> Bitboard {
    KNIGHT_JUMPS[sq.index() as usize]
}

/// Returns the on-board squares adjacent to `sq`.
#[inline]
pub fn king_steps(sq: Square) -> Bitboard {
    KING_STEPS[sq.index() as usize]
}

/// Builds a per-square table from a set of offsets at compile time.
const fn compute_jumps(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut index = 0u8;

    while index < 64 {
        let mut bits = 0u64;
        if let Some(from) = Square::from_index(index) {
            let mut i = 0;
            while i < offsets.len() {
                let (df, dr) = offsets[i];
                if let Some(to) = from.offset(df, dr) {
                    bits |= 1u64 << to.index();
                }
                i += 1;
            }
        }
        table[index as usize] = Bitboard(bits);
        index += 1;
    }

    table
}
