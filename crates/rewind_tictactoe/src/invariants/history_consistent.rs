//! History consistency invariant: entries line up with moves played.

use super::Invariant;
use crate::game::Game;

/// Invariant: the history is a well-formed log of moves.
///
/// - never empty, and `step` points into it
/// - entry 0 is the empty board with no last move
/// - entry `i` has exactly `i` occupied squares
/// - every snapshot has the game's dimensions
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if game.step() >= history.len() {
            return false;
        }
        if first.last_played().is_some() || !first.board().is_empty_board() {
            return false;
        }

        history.iter().enumerate().all(|(i, entry)| {
            entry.board().dims() == game.dims()
                && entry.board().occupied() == i
                && (i == 0 || entry.last_played().is_some())
        })
    }

    fn description() -> &'static str {
        "History starts empty and entry i has exactly i marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::standard();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = Game::new(4).unwrap();
        for index in [0, 5, 10, 15] {
            game.play(index).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = Game::standard();
        game.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = Game::standard();
        game.step = 1;
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = Game::standard();
        game.play(4).unwrap();

        // Corrupt by adding a square without a history entry
        game.history[1]
            .board
            .set(0, Square::Occupied(Player::O))
            .unwrap();

        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
