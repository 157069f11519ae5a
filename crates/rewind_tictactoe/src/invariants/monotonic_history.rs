//! Monotonic history invariant: each snapshot extends the previous one.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: snapshots only ever gain the mark that was just played.
///
/// Entry `i > 0` equals entry `i - 1` everywhere except at its
/// `last_played` square, which was empty before and is occupied now.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let [prev, next] = pair else {
                return false;
            };
            let Some(index) = next.last_played() else {
                return false;
            };

            prev.board().get(index) == Some(Square::Empty)
                && next.board().get(index).is_some_and(|s| !s.is_empty())
                && prev
                    .board()
                    .squares()
                    .iter()
                    .zip(next.board().squares())
                    .enumerate()
                    .all(|(i, (a, b))| i == index || a == b)
        })
    }

    fn description() -> &'static str {
        "Snapshots are monotonic (only the played square changes)"
    }
}
