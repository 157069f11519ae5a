//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Generates every line of a `dims x dims` board.
///
/// Rows first, then columns, then the main and anti diagonals:
/// `2 * dims + 2` lines of `dims` indices each. For `dims == 3` this is
/// the classic eight-line table.
#[instrument]
pub fn lines(dims: usize) -> Vec<Vec<usize>> {
    let rows = (0..dims).map(|row| (0..dims).map(|col| row * dims + col).collect::<Vec<_>>());
    let columns = (0..dims).map(|col| (0..dims).map(|row| row * dims + col).collect::<Vec<_>>());
    let diagonal: Vec<usize> = (0..dims).map(|i| i * dims + i).collect();
    let anti_diagonal: Vec<usize> = (0..dims).map(|i| i * dims + (dims - 1 - i)).collect();

    rows.chain(columns)
        .chain([diagonal, anti_diagonal])
        .collect()
}

/// Returns the first complete line on the board, if any.
#[instrument(skip(board), fields(dims = board.dims()))]
pub fn winning_line(board: &Board) -> Option<Vec<usize>> {
    lines(board.dims())
        .into_iter()
        .find(|line| line_owner(board, line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds every square of a row,
/// column or diagonal, `None` otherwise.
#[instrument(skip(board), fields(dims = board.dims()))]
pub fn winner(board: &Board) -> Option<Player> {
    lines(board.dims())
        .iter()
        .find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let (first, rest) = line.split_first()?;
    let player = board.get(*first)?.mark()?;
    rest.iter()
        .all(|&pos| board.get(pos) == Some(Square::Occupied(player)))
        .then_some(player)
}
