//! Move legality for individual chess pieces.
//!
//! This crate provides:
//! - [`Piece`] - one piece with a pure "may I move there?" predicate
//! - [`BoardQuery`] - the occupancy lookup a piece needs from its board
//! - [`LegalityRules`] - switches for pawn blocking and own-color captures
//! - [`movegen`] - per-kind candidate square generation
//! - [`Bitboard`] - the square set candidates are returned in
//!
//! # Architecture
//!
//! A piece holds a shared reference to something implementing
//! [`BoardQuery`]. On every query it recomputes its candidate set from its
//! own state (color, square, first-move flag) and the board's occupancy
//! answers, then checks membership. Nothing is cached and nothing is
//! mutated, so the same board answers always give the same result.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, PieceKind};
//! use chess_pieces::{LegalityRules, Occupancy, Piece};
//!
//! let board = Occupancy::new()
//!     .with(Color::White, "d2".parse().unwrap())
//!     .with(Color::Black, "b3".parse().unwrap());
//!
//! let pawn = Piece::pawn(&board, Color::White, "a2".parse().unwrap(), false);
//! assert!(pawn.attempt_move("A4"));
//! assert!(pawn.attempt_move("B3"));
//!
//! let knight = Piece::new(&board, PieceKind::Knight, Color::White, "b1".parse().unwrap())
//!     .with_rules(LegalityRules::strict());
//! assert!(knight.attempt_move("c3"));
//! assert!(!knight.attempt_move("d2"));
//! ```

mod bitboard;
mod board;
pub mod movegen;
mod piece;
pub mod rules;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{BoardQuery, EmptyBoard, FnBoard, FullBoard, Occupancy};
pub use piece::{MoveVerdict, Piece, PieceState};
pub use rules::{AdvanceRule, CaptureRule, ConfigError, LegalityRules};
