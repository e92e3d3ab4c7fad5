//! The board as seen by a piece.
//!
//! Pieces never look inside a board. They ask one question, "is this square
//! occupied?", through [`BoardQuery`]. Whatever owns the real board state
//! implements the trait; the implementations here cover plain occupancy sets,
//! per-color occupancy, and constant stand-ins.

use crate::Bitboard;
use chess_core::{Color, Square};

/// Read-only occupancy lookup consumed by move generation.
///
/// Both methods take `&self`: answering a legality query can never change the
/// board.
pub trait BoardQuery {
    /// Returns true if any piece stands on `square`.
    fn occupied(&self, square: Square) -> bool;

    /// Returns the color of the piece on `square`, if the board tracks it.
    ///
    /// `None` means either an empty square or an occupant of unknown color.
    /// Boards that only know occupancy keep the default.
    fn occupant(&self, _square: Square) -> Option<Color> {
        None
    }
}

impl<T: BoardQuery + ?Sized> BoardQuery for &T {
    #[inline]
    fn occupied(&self, square: Square) -> bool {
        (**self).occupied(square)
    }

    #[inline]
    fn occupant(&self, square: Square) -> Option<Color> {
        (**self).occupant(square)
    }
}

impl BoardQuery for Bitboard {
    #[inline]
    fn occupied(&self, square: Square) -> bool {
        self.contains(square)
    }
}

/// A board with nothing on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBoard;

impl BoardQuery for EmptyBoard {
    #[inline]
    fn occupied(&self, _square: Square) -> bool {
        false
    }
}

/// A board that reports every square occupied by a piece of unknown color.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullBoard;

impl BoardQuery for FullBoard {
    #[inline]
    fn occupied(&self, _square: Square) -> bool {
        true
    }
}

/// Adapts a closure into a [`BoardQuery`].
#[derive(Debug, Clone, Copy)]
pub struct FnBoard<F>(pub F);

impl<F> BoardQuery for FnBoard<F>
where
    F: Fn(Square) -> bool,
{
    #[inline]
    fn occupied(&self, square: Square) -> bool {
        (self.0)(square)
    }
}

/// Occupancy split by color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    white: Bitboard,
    black: Bitboard,
}

impl Occupancy {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Occupancy {
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
        }
    }

    /// Puts a piece of `color` on `square`, replacing any previous occupant.
    pub fn place(&mut self, color: Color, square: Square) {
        self.remove(square);
        match color {
            Color::White => self.white.set(square),
            Color::Black => self.black.set(square),
        }
    }

    /// Builder form of [`place`](Self::place).
    pub fn with(mut self, color: Color, square: Square) -> Self {
        self.place(color, square);
        self
    }

    /// Clears `square`.
    pub fn remove(&mut self, square: Square) {
        self.white.clear(square);
        self.black.clear(square);
    }

    /// Returns the squares holding pieces of `color`.
    pub const fn pieces(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Returns every occupied square.
    pub fn all(&self) -> Bitboard {
        self.white | self.black
    }
}

impl BoardQuery for Occupancy {
    #[inline]
    fn occupied(&self, square: Square) -> bool {
        self.all().contains(square)
    }

    fn occupant(&self, square: Square) -> Option<Color> {
        if self.white.contains(square) {
            Some(Color::White)
        } else if self.black.contains(square) {
            Some(Color::Black)
        } else {
            None
        }
    }
}
