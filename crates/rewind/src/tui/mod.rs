//! Terminal UI for Rewind

mod app;
mod feedback;
mod input;
pub mod ui;

pub use app::App;
pub use feedback::{Celebration, Feedback};
pub use input::{Action, action_for_key, move_cursor};

use crate::config::EffectsConfig;
use crate::effects::{CueSink, Muted, TerminalBell};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::Game;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Frame interval while an effect is running.
const FRAME: Duration = Duration::from_millis(33);

/// Poll interval while idle.
const IDLE: Duration = Duration::from_millis(250);

/// Runs the game until the user quits.
#[instrument(skip_all, fields(dims = game.dims()))]
pub fn run(game: Game, config: &EffectsConfig) -> Result<()> {
    let sound: Box<dyn CueSink> = if *config.sound().enabled() {
        Box::new(TerminalBell::new(io::stdout(), config.sound().throttle()))
    } else {
        Box::new(Muted)
    };
    let mut app = App::new(game, config, sound, rand::random())?;

    info!("Starting terminal UI");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, wait for input, advance effects; until quit.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        let mut hits = ui::HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.set_hits(hits);

        let timeout = if app.is_animating() { FRAME } else { IDLE };
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    Ok(())
}
