//! A single piece and its legality predicate.

use crate::board::BoardQuery;
use crate::movegen;
use crate::rules::LegalityRules;
use crate::Bitboard;
use chess_core::{Color, PieceKind, Square};
use std::fmt;

/// Kind-specific state of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    /// `has_moved` is set by whoever applies moves once the pawn has made
    /// its first move.
    Pawn { has_moved: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceState {
    /// Returns the state of a piece of `kind` that has not moved yet.
    pub const fn initial(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => PieceState::Pawn { has_moved: false },
            PieceKind::Knight => PieceState::Knight,
            PieceKind::Bishop => PieceState::Bishop,
            PieceKind::Rook => PieceState::Rook,
            PieceKind::Queen => PieceState::Queen,
            PieceKind::King => PieceState::King,
        }
    }

    /// Returns the kind this state belongs to.
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceState::Pawn { .. } => PieceKind::Pawn,
            PieceState::Knight => PieceKind::Knight,
            PieceState::Bishop => PieceKind::Bishop,
            PieceState::Rook => PieceKind::Rook,
            PieceState::Queen => PieceKind::Queen,
            PieceState::King => PieceKind::King,
        }
    }
}

/// Outcome of checking a move target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    /// The target is one of the piece's candidate squares.
    Legal,
    /// The target is a square, but not one the piece can reach.
    Illegal,
    /// The target token does not name a square on the board.
    Malformed,
    /// The piece has been captured and cannot move.
    Inactive,
}

impl MoveVerdict {
    #[inline]
    pub const fn is_legal(self) -> bool {
        matches!(self, MoveVerdict::Legal)
    }
}

impl fmt::Display for MoveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveVerdict::Legal => "legal",
            MoveVerdict::Illegal => "illegal",
            MoveVerdict::Malformed => "malformed target",
            MoveVerdict::Inactive => "piece is not on the board",
        };
        f.write_str(text)
    }
}

/// One chess piece on a board it can query but not change.
///
/// The piece answers "may I move to this square?" without moving. Applying a
/// move (updating the square, marking a pawn as moved, deactivating a
/// captured piece) is left to the caller through the setters.
///
/// # Example
///
/// ```
/// use chess_core::Color;
/// use chess_pieces::{EmptyBoard, Piece};
///
/// let board = EmptyBoard;
/// let pawn = Piece::pawn(&board, Color::White, "A2".parse().unwrap(), false);
/// assert!(pawn.attempt_move("A3"));
/// assert!(pawn.attempt_move("A4"));
/// assert!(!pawn.attempt_move("A5"));
/// ```
pub struct Piece<'a, B: BoardQuery + ?Sized> {
    board: &'a B,
    color: Color,
    active: bool,
    square: Square,
    state: PieceState,
    rules: LegalityRules,
}

impl<'a, B: BoardQuery + ?Sized> Piece<'a, B> {
    /// Places a new, active piece of `kind` on `square`.
    pub fn new(board: &'a B, kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            board,
            color,
            active: true,
            square,
            state: PieceState::initial(kind),
            rules: LegalityRules::default(),
        }
    }

    /// Places a new, active pawn.
    pub fn pawn(board: &'a B, color: Color, square: Square, has_moved: bool) -> Self {
        Piece {
            state: PieceState::Pawn { has_moved },
            ..Self::new(board, PieceKind::Pawn, color, square)
        }
    }

    /// Replaces the legality rules used by this piece.
    pub fn with_rules(mut self, rules: LegalityRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.state.kind()
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn rules(&self) -> LegalityRules {
        self.rules
    }

    /// Returns true for a pawn that has made its first move. Other kinds do
    /// not track this and always return false.
    pub fn has_moved(&self) -> bool {
        matches!(self.state, PieceState::Pawn { has_moved: true })
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Marks the piece as taken off the board.
    pub fn capture(&mut self) {
        self.active = false;
    }

    /// Moves the piece to `square` after the caller has applied a move.
    pub fn place(&mut self, square: Square) {
        self.square = square;
    }

    /// Records whether a pawn has made its first move. No effect on other
    /// kinds.
    pub fn set_has_moved(&mut self, moved: bool) {
        if let PieceState::Pawn { has_moved } = &mut self.state {
            *has_moved = moved;
        }
    }

    /// Computes every square this piece may move to right now.
    ///
    /// Unlike a purely geometric candidate set, this depends on the active
    /// flag: once [`capture`](Self::capture) or `set_active(false)` has been
    /// called the set is empty, whatever the piece's square and the board.
    pub fn destinations(&self) -> Bitboard {
        if !self.active {
            return Bitboard::EMPTY;
        }

        let (from, color, board, rules) = (self.square, self.color, self.board, self.rules);
        let targets = match self.state {
            PieceState::Pawn { has_moved } => {
                movegen::pawn_destinations(from, color, has_moved, board, rules)
            }
            PieceState::Knight => movegen::knight_destinations(from, color, board, rules),
            PieceState::Bishop => movegen::bishop_destinations(from, color, board, rules),
            PieceState::Rook => movegen::rook_destinations(from, color, board, rules),
            PieceState::Queen => movegen::queen_destinations(from, color, board, rules),
            PieceState::King => movegen::king_destinations(from, color, board, rules),
        };

        tracing::trace!(
            kind = %self.kind(),
            color = %color,
            from = %from,
            candidates = targets.count(),
            "computed destinations"
        );
        targets
    }

    /// Returns true if the piece may move to `target`.
    pub fn attempt_move_to(&self, target: Square) -> bool {
        self.destinations().contains(target)
    }

    /// Returns true if the piece may move to the square named by `target`,
    /// such as `"A3"` or `"e4"`.
    ///
    /// Illegal moves and tokens that do not name a square give `false`.
    ///
    /// A captured piece (active flag cleared) also gives `false` for every
    /// target, including squares its geometry would otherwise reach. This
    /// goes beyond a plain geometric predicate, which ignores the flag. Use
    /// [`check_move`](Self::check_move) to tell the cases apart.
    pub fn attempt_move(&self, target: &str) -> bool {
        self.check_move(target).is_legal()
    }

    /// Classifies a move to the square named by `target`.
    pub fn check_move(&self, target: &str) -> MoveVerdict {
        let verdict = match Square::from_algebraic(target) {
            None => MoveVerdict::Malformed,
            Some(_) if !self.active => MoveVerdict::Inactive,
            Some(square) if self.attempt_move_to(square) => MoveVerdict::Legal,
            Some(_) => MoveVerdict::Illegal,
        };

        tracing::debug!(
            kind = %self.kind(),
            color = %self.color,
            from = %self.square,
            to = target,
            %verdict,
            "checked move"
        );
        verdict
    }
}

impl<B: BoardQuery + ?Sized> Clone for Piece<'_, B> {
    fn clone(&self) -> Self {
        Piece {
            board: self.board,
            color: self.color,
            active: self.active,
            square: self.square,
            state: self.state,
            rules: self.rules,
        }
    }
}

impl<B: BoardQuery + ?Sized> fmt::Debug for Piece<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("color", &self.color)
            .field("active", &self.active)
            .field("square", &self.square)
            .field("state", &self.state)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
