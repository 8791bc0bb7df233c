//! Terminal setup and the draw/poll loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(200);

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(mut app: App) -> Result<()> {
    let mut terminal = setup()?;
    let result = event_loop(&mut terminal, &mut app).await;
    // Restore even when the loop failed.
    let restored = restore(&mut terminal);
    result?;
    restored
}

fn setup() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    app.refresh();
    let mut last_tick = Instant::now();

    loop {
        app.drain_events();
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Polling blocks this worker; background tasks run on the others.
        if tokio::task::block_in_place(|| event::poll(timeout))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }

        if app.quit {
            break;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
