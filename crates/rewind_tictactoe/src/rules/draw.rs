//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(dims = board.dims()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// Checks if the board is a draw: full, with no winner.
#[instrument(skip(board), fields(dims = board.dims()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    fn board_from(dims: usize, marks: &[Player]) -> Board {
        let squares = marks.iter().map(|p| Square::Occupied(*p)).collect();
        Board::from_squares(dims, squares).unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::standard();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::standard();
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / X O O / O X X
        let board = board_from(3, &[X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
        // Pure: asking again agrees.
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = board_from(3, &[X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_four_by_four_draw() {
        use Player::{O, X};
        // X X O O / O O X X / X X O O / O O X X
        let board = board_from(
            4,
            &[X, X, O, O, O, O, X, X, X, X, O, O, O, O, X, X],
        );
        assert!(is_draw(&board));
    }
}
