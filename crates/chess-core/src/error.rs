//! Errors raised while reading board coordinates.

use thiserror::Error;

/// A square token that does not name a square on the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected a file letter followed by a rank digit")]
    InvalidLength(String),

    #[error("invalid file '{0}': expected a letter from A to H")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected a digit from 1 to 8")]
    InvalidRank(char),
}
