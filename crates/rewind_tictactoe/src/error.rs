//! Error types for board construction and game actions.

use derive_more::{Display, Error};

/// Error building or writing to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length below the minimum of three.
    #[display("Board must be at least 3x3, got {dims}x{dims}")]
    TooSmall {
        /// Requested side length.
        dims: usize,
    },

    /// Side length whose square count does not fit in memory.
    #[display("Board of side {dims} is too large")]
    TooLarge {
        /// Requested side length.
        dims: usize,
    },

    /// Index outside the board.
    #[display("Position {index} out of bounds (board has {len} squares)")]
    OutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },

    /// Square list does not match `dims * dims`.
    #[display("Expected {expected} squares, got {actual}")]
    LengthMismatch {
        /// Required number of squares.
        expected: usize,
        /// Number of squares supplied.
        actual: usize,
    },
}

/// Error that can occur when validating or applying a game action.
///
/// Every variant leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The board being shown already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Square {index} is off the board ({len} squares)")]
    OutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },

    /// The requested step is not in the history.
    #[display("Step {step} is outside the history ({len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { index, len } => MoveError::OutOfBounds { index, len },
            other => MoveError::InvariantViolation(other.to_string()),
        }
    }
}
