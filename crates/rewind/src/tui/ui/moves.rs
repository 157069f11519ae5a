//! Move list rendering.

use super::HitMap;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Game, HistoryEntry};

/// Label for history entry `step`, with 1-based row and column.
pub fn describe(step: usize, entry: &HistoryEntry) -> String {
    match (step, entry.coordinates()) {
        (0, _) => "Go to game start".to_string(),
        (_, Some((row, col))) => format!("Move #{}, ({}, {})", step, row + 1, col + 1),
        (_, None) => format!("Move #{}", step),
    }
}

/// First entry to show so the current step stays visible.
fn scroll_offset(step: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    step.saturating_sub(visible - 1).min(len - visible)
}

/// Renders the history panel, recording each entry in `hits`.
pub fn render_moves(frame: &mut Frame, area: Rect, game: &Game, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let history = game.history();
    let current = game.step();
    let visible = usize::from(inner.height);
    let offset = scroll_offset(current, history.len(), visible);

    let lines = history
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(step, entry)| {
            let (marker, style) = if step == current {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else if step > current {
                ("  ", Style::default().fg(Color::DarkGray))
            } else {
                ("  ", Style::default())
            };
            Line::from(vec![Span::styled(marker, style), Span::styled(describe(step, entry), style)])
        })
        .collect::<Vec<_>>();

    for (row, step) in (offset..offset + lines.len()).enumerate() {
        let y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
        hits.add_step(Rect::new(inner.x, y, inner.width, 1), step);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_one_based_coordinates() {
        let mut game = Game::standard();
        game.play(5).unwrap();
        let history = game.history();
        assert_eq!(describe(0, &history[0]), "Go to game start");
        assert_eq!(describe(1, &history[1]), "Move #1, (2, 3)");
    }

    #[test]
    fn test_scroll_keeps_step_visible() {
        assert_eq!(scroll_offset(3, 5, 10), 0);
        assert_eq!(scroll_offset(2, 20, 5), 0);
        assert_eq!(scroll_offset(9, 20, 5), 5);
        assert_eq!(scroll_offset(19, 20, 5), 15);
        assert_eq!(scroll_offset(4, 20, 0), 0);
    }
}
