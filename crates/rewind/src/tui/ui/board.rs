//! Board rendering.

use super::{HitMap, center_rect};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Game, Player, Square, winning_line};

/// Cell size when the board fits comfortably.
const ROOMY: (u16, u16) = (5, 3);
/// Cell size when space is tight.
const COMPACT: (u16, u16) = (3, 1);

/// Renders the board centered in `area`, recording each square in `hits`.
///
/// Returns the rectangle the board occupies.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: usize,
    hits: &mut HitMap,
) -> Rect {
    let dims = game.dims();
    let n = u16::try_from(dims).unwrap_or(u16::MAX);
    let extent = |cell: u16| n.saturating_mul(cell).saturating_add(n.saturating_sub(1));

    let (cell_w, cell_h) = if extent(ROOMY.0) <= area.width && extent(ROOMY.1) <= area.height {
        ROOMY
    } else {
        COMPACT
    };
    let board = center_rect(area, extent(cell_w), extent(cell_h));

    let board_state = game.board();
    let winners = winning_line(board_state).unwrap_or_default();
    let separator = Style::default().fg(Color::DarkGray);

    for row in 0..n {
        let y = board.y.saturating_add(row.saturating_mul(cell_h + 1));

        for col in 0..n {
            let x = board.x.saturating_add(col.saturating_mul(cell_w + 1));
            let index = usize::from(row) * dims + usize::from(col);
            let cell = Rect::new(x, y, cell_w, cell_h).intersection(area);
            if cell.is_empty() {
                continue;
            }

            let square = board_state.get(index).unwrap_or_default();
            let style = cell_style(square, index == cursor, winners.contains(&index));
            let label = match square {
                Square::Empty if dims == 3 => (index + 1).to_string(),
                Square::Empty => String::new(),
                Square::Occupied(player) => player.to_string(),
            };
            let mut lines = vec![Line::default(); usize::from(cell_h / 2)];
            lines.push(Line::from(label));
            frame.render_widget(
                Paragraph::new(lines).style(style).alignment(Alignment::Center),
                cell,
            );
            hits.add_cell(cell, index);

            if col + 1 < n {
                let bar = Rect::new(x.saturating_add(cell_w), y, 1, cell_h).intersection(area);
                if !bar.is_empty() {
                    let text = vec![Line::from("│"); usize::from(cell_h)];
                    frame.render_widget(Paragraph::new(text).style(separator), bar);
                }
            }
        }

        if row + 1 < n {
            let rule = Rect::new(board.x, y.saturating_add(cell_h), board.width, 1).intersection(area);
            if !rule.is_empty() {
                frame.render_widget(Paragraph::new(rule_line(n, cell_w)).style(separator), rule);
            }
        }
    }

    board
}

fn rule_line(n: u16, cell_w: u16) -> String {
    let segment = "─".repeat(usize::from(cell_w));
    vec![segment; usize::from(n)].join("┼")
}

fn cell_style(square: Square, is_cursor: bool, is_winning: bool) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if is_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else if is_winning {
        base.bg(Color::Green)
    } else {
        base
    }
}
