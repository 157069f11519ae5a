//! Game engine: moves, history and time travel.

use crate::contracts::{Contract, PlayContract};
use crate::error::{BoardError, MoveError};
use crate::history::HistoryEntry;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with a branching move history.
///
/// The history always starts with the empty board. `step` selects the
/// snapshot being shown; the player to move is derived from its parity
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) dims: usize,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game on an empty `dims x dims` board.
    #[instrument]
    pub fn new(dims: usize) -> Result<Self, BoardError> {
        let board = Board::new(dims)?;
        info!(dims, "New game");
        Ok(Self {
            dims,
            history: vec![HistoryEntry::initial(board)],
            step: 0,
        })
    }

    /// Creates a new classic 3x3 game.
    pub fn standard() -> Self {
        Self {
            dims: 3,
            history: vec![HistoryEntry::initial(Board::standard())],
            step: 0,
        }
    }

    /// Plays the next player's mark at `index` on the board being shown.
    ///
    /// Entries after the current step are discarded before the new
    /// snapshot is appended, and the game moves to that snapshot.
    ///
    /// # Errors
    ///
    /// Rejected, leaving the game untouched, when the shown board is
    /// already won or drawn, when the square is taken, or when `index`
    /// is off the board.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if let Err(e) = PlayContract::pre(self, &index) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let mut board = self.board().clone();
        board.set(index, Square::Occupied(player))?;

        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry::after_move(board, index));
        self.step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            if let Err(e) = PlayContract::post(&before, self) {
                tracing::error!(error = %e, "Postcondition failed, restoring previous state");
                *self = before;
                return Err(e);
            }
        }

        let status = self.status();
        info!(?status, step = self.step, "Move applied");
        Ok(status)
    }

    /// Shows the snapshot at `step` without altering the history.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::StepOutOfRange` when `step` is not in the
    /// history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        let len = self.history.len();
        if step >= len {
            debug!(len, "Jump rejected");
            return Err(MoveError::StepOutOfRange { step, len });
        }
        self.step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Returns the side length.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the entry being shown.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Returns the board being shown.
    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Returns the whole history, including entries after the current step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the entry being shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// Returns the status of the board being shown.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Returns the empty squares, or nothing when the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.status().is_over() {
            return Vec::new();
        }
        let board = self.board();
        (0..board.len()).filter(|&i| board.is_empty(i)).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[usize]) -> Game {
        let mut game = Game::standard();
        for &index in moves {
            game.play(index).unwrap();
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(3).unwrap();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current().last_played(), None);
        assert_eq!(game, Game::standard());
    }

    #[test]
    fn test_new_rejects_small_board() {
        assert_eq!(Game::new(2), Err(BoardError::TooSmall { dims: 2 }));
    }

    #[test]
    fn test_play_appends_snapshot() {
        let game = played(&[4]);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(game.current().last_played(), Some(4));
        // Earlier snapshot is untouched.
        assert!(game.history()[0].board().is_empty_board());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = played(&[4]);
        let before = game.clone();
        assert_eq!(game.play(4), Err(MoveError::SquareOccupied(4)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::standard();
        assert_eq!(
            game.play(9),
            Err(MoveError::OutOfBounds { index: 9, len: 9 })
        );
        assert_eq!(game, Game::standard());
    }

    #[test]
    fn test_play_after_win_rejected() {
        let mut game = played(&[0, 4, 1, 5, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        let before = game.clone();
        assert_eq!(game.play(8), Err(MoveError::GameOver));
        assert_eq!(game, before);
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_jump_to_changes_only_step() {
        let mut game = played(&[0, 4, 1]);
        let history = game.history().to_vec();
        game.jump_to(1).unwrap();
        assert_eq!(game.step(), 1);
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.board(), history[1].board());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = played(&[0, 4]);
        assert_eq!(
            game.jump_to(3),
            Err(MoveError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game.step(), 2);
    }

    #[test]
    fn test_branch_from_the_past() {
        let mut game = played(&[0, 4, 1]);
        game.jump_to(0).unwrap();
        game.play(2).unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.current().last_played(), Some(2));
    }

    #[test]
    fn test_jump_back_from_won_board_allows_play() {
        let mut game = played(&[0, 4, 1, 5, 2]);
        game.jump_to(4).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.play(2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_valid_moves() {
        let game = played(&[0, 4]);
        assert_eq!(game.valid_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }
}
