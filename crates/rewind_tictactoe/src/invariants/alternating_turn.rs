//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: the mark placed by entry `i` belongs to the player whose
/// turn it was after `i - 1` moves (X on odd entries, O on even ones).
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, entry)| entry.mover() == Some(Player::to_move_at(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
