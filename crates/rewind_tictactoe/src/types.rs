//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported board side length.
pub const MIN_DIMS: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player to move once `step` moves have been played.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Square `dims x dims` board.
///
/// Index `i` is row `i / dims`, column `i % dims`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    dims: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board with `dims` rows and columns.
    #[instrument]
    pub fn new(dims: usize) -> Result<Self, BoardError> {
        if dims < MIN_DIMS {
            return Err(BoardError::TooSmall { dims });
        }
        let len = dims
            .checked_mul(dims)
            .ok_or(BoardError::TooLarge { dims })?;
        Ok(Self {
            dims,
            squares: vec![Square::Empty; len],
        })
    }

    /// Creates the classic empty 3x3 board.
    pub fn standard() -> Self {
        Self {
            dims: MIN_DIMS,
            squares: vec![Square::Empty; MIN_DIMS * MIN_DIMS],
        }
    }

    /// Builds a board from explicit squares in row-major order.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(dims: usize, squares: Vec<Square>) -> Result<Self, BoardError> {
        let board = Self::new(dims)?;
        if squares.len() != board.len() {
            return Err(BoardError::LengthMismatch {
                expected: board.len(),
                actual: squares.len(),
            });
        }
        Ok(Self { dims, squares })
    }

    /// Returns the side length.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the number of squares (`dims * dims`).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Checks if no square is occupied.
    pub fn is_empty_board(&self) -> bool {
        self.squares.iter().all(|s| s.is_empty())
    }

    /// Gets the square at `index`.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at `index`.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let len = self.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, len })?;
        *slot = square;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Counts occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Zero-based `(row, column)` of `index`.
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len()).then(|| (index / self.dims, index % self.dims))
    }

    /// Flat index of a zero-based `(row, column)`.
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.dims && column < self.dims).then(|| row * self.dims + column)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let width = self.len().to_string().len();
        let separator = vec!["-".repeat(width); self.dims].join("+");
        let mut result = String::new();
        for row in 0..self.dims {
            let cells: Vec<String> = (0..self.dims)
                .map(|col| {
                    let pos = row * self.dims + col;
                    let symbol = match self.squares[pos] {
                        Square::Empty => (pos + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    format!("{symbol:>width$}")
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < self.dims {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the game is over (won or drawn).
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
