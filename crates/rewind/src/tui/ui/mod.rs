//! UI rendering using ratatui.

mod board;
mod moves;

use super::app::App;
use crate::effects::ConfettiLayer;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Game, GameStatus};

pub use board::render_board;
pub use moves::{describe, render_moves};

/// Width of the move list panel.
const MOVES_WIDTH: u16 = 30;

/// What a screen position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Cell(usize),
    /// A move list entry.
    Step(usize),
}

/// Clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, usize)>,
    steps: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Records a rendered board square.
    pub fn add_cell(&mut self, area: Rect, index: usize) {
        self.cells.push((area, index));
    }

    /// Records a rendered move list entry.
    pub fn add_step(&mut self, area: Rect, step: usize) {
        self.steps.push((area, step));
    }

    /// Finds what is drawn at the given terminal position.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        self.cells
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|&(_, index)| Target::Cell(index))
            .or_else(|| {
                self.steps
                    .iter()
                    .find(|(area, _)| area.contains(pos))
                    .map(|&(_, step)| Target::Step(step))
            })
    }

    /// Where square `index` was drawn.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        self.cells
            .iter()
            .find(|&&(_, i)| i == index)
            .map(|&(area, _)| area)
    }

    /// Where history entry `step` was drawn.
    pub fn step_rect(&self, step: usize) -> Option<Rect> {
        self.steps
            .iter()
            .find(|&&(_, s)| s == step)
            .map(|&(area, _)| area)
    }
}

/// Text for the status line.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::Draw => "Draw: Please try again!".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.next_player()),
    }
}

fn help_line(dims: usize) -> &'static str {
    if dims == 3 {
        "Click or 1-9/Enter: play | [ ]: step | Home/End: first/last | Q: quit"
    } else {
        "Click or arrows+Enter: play | [ ]: step | Home/End: first/last | Q: quit"
    }
}

/// Draws the main UI and returns its clickable regions.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(MOVES_WIDTH)])
        .split(chunks[1]);

    let board_area = render_board(f, body[0], app.game(), app.cursor(), &mut hits);
    render_moves(f, body[1], app.game(), &mut hits);

    let status = Paragraph::new(status_line(app.game()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_line(app.game().dims()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);

    if let Some(burst) = app.confetti() {
        let origin = Position::new(
            board_area.x + board_area.width / 2,
            board_area.y + board_area.height / 2,
        );
        f.render_widget(ConfettiLayer::new(burst, origin), f.area());
    }

    hits
}

/// Centers a `width x height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Player;

    #[test]
    fn test_status_lines() {
        let mut game = Game::standard();
        assert_eq!(status_line(&game), "Next player: X");
        game.play(0).unwrap();
        assert_eq!(status_line(&game), "Next player: O");
        for index in [3, 1, 4, 2] {
            game.play(index).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(status_line(&game), "Winner: X");
    }

    #[test]
    fn test_draw_status_line() {
        let mut game = Game::standard();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(index).unwrap();
        }
        assert_eq!(status_line(&game), "Draw: Please try again!");
    }

    #[test]
    fn test_hit_map_lookup() {
        let mut hits = HitMap::default();
        hits.add_cell(Rect::new(0, 0, 5, 3), 0);
        hits.add_cell(Rect::new(6, 0, 5, 3), 1);
        hits.add_step(Rect::new(20, 1, 10, 1), 3);
        assert_eq!(hits.target_at(2, 2), Some(Target::Cell(0)));
        assert_eq!(hits.target_at(6, 0), Some(Target::Cell(1)));
        assert_eq!(hits.target_at(5, 1), None);
        assert_eq!(hits.target_at(25, 1), Some(Target::Step(3)));
        assert_eq!(hits.cell_rect(1), Some(Rect::new(6, 0, 5, 3)));
        assert_eq!(hits.step_rect(4), None);
    }

    #[test]
    fn test_center_rect() {
        let r = center_rect(Rect::new(0, 0, 20, 10), 10, 4);
        assert_eq!(r, Rect::new(5, 3, 10, 4));
    }
}
