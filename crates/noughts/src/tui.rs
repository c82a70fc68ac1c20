//! Terminal setup and the event loop.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::config::Settings;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the game until the player quits.
///
/// The terminal is restored even when the loop fails.
pub fn run(settings: Settings) -> Result<()> {
    info!("Starting noughts");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.engine().scores(), "Session ended");
    res
}

#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let delay = Duration::from_millis(*app.settings().computer_delay_ms());
    let mut computer_since: Option<Instant> = None;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if *app.should_quit() {
            return Ok(());
        }

        if app.computer_to_move() {
            let since = *computer_since.get_or_insert_with(Instant::now);
            if since.elapsed() >= delay {
                computer_since = None;
                let outcome = app.play_computer_turn()?;
                debug!(?outcome, "Computer turn done");
                continue;
            }
        } else {
            computer_since = None;
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
}

