mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{AppMode, HistoryViewMode, InputStatus, LogBuffer, Turn};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{history::GameHistory, secret::SecretGenerator};

/// Entry point for running the UI. Hands back the games played.
pub fn run_ui(generator: SecretGenerator, reveal_secret: bool) -> Result<GameHistory> {
    let logs = LogBuffer::new();
    let mut app = App::new(generator, reveal_secret, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app.into_history())
}
