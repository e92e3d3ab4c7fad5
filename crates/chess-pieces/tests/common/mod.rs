//! Shared helpers for integration tests.

#![allow(dead_code)]

use chess_core::{Color, Square};
use chess_pieces::BoardQuery;
use std::cell::RefCell;

/// Installs a fmt subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn sq(token: &str) -> Square {
    token.parse().expect("test square token")
}

/// Board stand-in that remembers every square it was asked about.
pub struct RecordingBoard<B> {
    inner: B,
    queries: RefCell<Vec<Square>>,
}

impl<B: BoardQuery> RecordingBoard<B> {
    pub fn new(inner: B) -> Self {
        RecordingBoard {
            inner,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Squares queried so far, in call order.
    pub fn queries(&self) -> Vec<Square> {
        self.queries.borrow().clone()
    }

    pub fn reset(&self) {
        self.queries.borrow_mut().clear();
    }
}

impl<B: BoardQuery> BoardQuery for RecordingBoard<B> {
    fn occupied(&self, square: Square) -> bool {
        self.queries.borrow_mut().push(square);
        self.inner.occupied(square)
    }

    fn occupant(&self, square: Square) -> Option<Color> {
        self.queries.borrow_mut().push(square);
        self.inner.occupant(square)
    }
}
