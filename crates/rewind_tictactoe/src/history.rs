//! Move history: one board snapshot per move.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A recorded board snapshot plus the square that was just played.
///
/// The initial entry of every game has an empty board and no last move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) last_played: Option<usize>,
}

impl HistoryEntry {
    /// Creates the initial entry for an empty board.
    pub fn initial(board: Board) -> Self {
        Self {
            board,
            last_played: None,
        }
    }

    /// Creates the entry recorded after playing `index`.
    pub fn after_move(board: Board, index: usize) -> Self {
        Self {
            board,
            last_played: Some(index),
        }
    }

    /// Returns the snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the index played to reach this snapshot.
    pub fn last_played(&self) -> Option<usize> {
        self.last_played
    }

    /// Zero-based `(row, column)` of the last move.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.last_played
            .and_then(|index| self.board.coordinates(index))
    }

    /// Player whose mark was placed to reach this snapshot.
    pub fn mover(&self) -> Option<Player> {
        self.last_played
            .and_then(|index| self.board.get(index))
            .and_then(|square| square.mark())
    }
}
