pub mod app;
pub mod theme;
pub mod ui;

use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::error::{Error, Result};
pub use app::App;
use theme::Theme;

/// Take over the terminal and run the interactive UI until the user quits
pub fn run(mut app: App, tick_rate: Duration) -> Result<()> {
    if !stdout().is_tty() {
        return Err(Error::NotATerminal);
    }

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    info!(tasks = app.board.tasks().len(), "interactive session started");

    let result = event_loop(&mut terminal, &mut app, tick_rate);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    info!("interactive session ended");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, tick_rate: Duration) -> Result<()> {
    let theme = Theme::default();
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app, &theme))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                app.handle_key_event(key_event);
            }
        }
    }
    Ok(())
}
