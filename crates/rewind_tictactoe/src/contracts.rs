//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::MoveError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::Square;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board being shown has neither a winner nor a draw.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any play on a finished board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a square on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects indices outside `0..dims * dims`.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        let len = game.board().len();
        if index >= len {
            Err(MoveError::OutOfBounds { index, len })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the index must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(index) {
            Err(MoveError::SquareOccupied(index))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a play is legal if the game is not over, the
/// index is on the board and the square is empty.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        InBounds::check(index, game)?;
        SquareIsEmpty::check(index, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `Game::play`.
///
/// Preconditions:
/// - Board being shown is not finished
/// - Index is on the board
/// - Square is empty
///
/// Postconditions:
/// - All game invariants hold
/// - History was cut after the old step and grew by one entry
/// - The new snapshot differs from the old one only at the played index,
///   which holds the mark of the player who was to move
pub struct PlayContract;

impl Contract<Game, usize> for PlayContract {
    fn pre(game: &Game, index: &usize) -> Result<(), MoveError> {
        LegalPlay::check(*index, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.history().len() != before.step() + 2 || after.step() != before.step() + 1 {
            warn!(
                before_step = before.step(),
                after_step = after.step(),
                after_len = after.history().len(),
                "History was not branched at the current step"
            );
            return Err(MoveError::InvariantViolation(
                "History was not branched at the current step".to_string(),
            ));
        }

        if after.history()[..=before.step()] != before.history()[..=before.step()] {
            return Err(MoveError::InvariantViolation(
                "Past snapshots changed".to_string(),
            ));
        }

        let index = after.current().last_played().ok_or_else(|| {
            MoveError::InvariantViolation("New snapshot has no last move".to_string())
        })?;
        let old = before.board().squares();
        let new = after.board().squares();
        let changed_elsewhere = old
            .iter()
            .zip(new)
            .enumerate()
            .any(|(i, (a, b))| i != index && a != b);
        if changed_elsewhere
            || new.get(index) != Some(&Square::Occupied(before.next_player()))
        {
            return Err(MoveError::InvariantViolation(format!(
                "Snapshot differs from the previous board outside square {}",
                index
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::types::Player;

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::standard();
        assert!(PlayContract::pre(&game, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::standard();
        game.play(4).unwrap();
        assert!(matches!(
            PlayContract::pre(&game, &4),
            Err(MoveError::SquareOccupied(4))
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = Game::new(4).unwrap();
        assert_eq!(
            PlayContract::pre(&game, &16),
            Err(MoveError::OutOfBounds { index: 16, len: 16 })
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let mut game = Game::standard();
        for index in [0, 3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        // Occupied and finished: the finished board wins.
        assert_eq!(PlayContract::pre(&game, &0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::standard();
        let mut after = before.clone();
        after.play(4).unwrap();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branch() {
        let mut before = Game::standard();
        for index in [0, 4, 8] {
            before.play(index).unwrap();
        }
        before.jump_to(1).unwrap();
        let mut after = before.clone();
        after.play(2).unwrap();
        assert_eq!(after.history().len(), 3);
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::standard();
        let mut after = before.clone();
        after.play(4).unwrap();

        // Corrupt the new snapshot with an extra mark.
        after.history[1]
            .board
            .set(0, Square::Occupied(Player::O))
            .unwrap();

        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let mut before = Game::standard();
        before.play(0).unwrap();
        before.play(4).unwrap();
        before.jump_to(1).unwrap();

        // Append without cutting the old future.
        let mut after = before.clone();
        let mut board = after.board().clone();
        board.set(8, Square::Occupied(Player::O)).unwrap();
        after.history.push(HistoryEntry::after_move(board, 8));
        after.step = after.history.len() - 1;

        assert!(PlayContract::post(&before, &after).is_err());
    }
}
