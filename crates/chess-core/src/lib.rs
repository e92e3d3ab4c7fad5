//! Core types for chess.
//!
//! This crate provides the value types shared by the move-legality code:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`SquareError`] for square tokens that do not name a square

mod color;
mod error;
mod piece;
mod square;

pub use color::Color;
pub use error::SquareError;
pub use piece::PieceKind;
pub use square::{File, Rank, Square};
