//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given square.
    Play(usize),
    /// Play the square under the cursor.
    PlayCursor,
    /// Move the cursor; always one of the arrow key codes.
    MoveCursor(KeyCode),
    /// Show the previous history entry.
    StepBack,
    /// Show the next history entry.
    StepForward,
    /// Show the empty starting board.
    First,
    /// Show the latest history entry.
    Last,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action on a `dims x dims` board.
pub fn action_for_key(key: KeyEvent, dims: usize) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(KeyCode::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(KeyCode::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(KeyCode::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(KeyCode::Right)),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        // Numbered squares are only shown on the classic board.
        KeyCode::Char(c @ '1'..='9') if dims == 3 => c
            .to_digit(10)
            .map(|d| Action::Play(d as usize - 1)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys; edges and other keys leave it in place.
pub fn move_cursor(cursor: usize, dims: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / dims, cursor % dims);

    match key {
        KeyCode::Up if row > 0 => cursor - dims,
        KeyCode::Down if row + 1 < dims => cursor + dims,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col + 1 < dims => cursor + 1,
        _ => cursor,
    }
}
