use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{history::GameHistory, secret::SecretGenerator, session::GameSession};

use super::types::{AppMode, HistoryViewMode, LogBuffer, Turn};

/// Main application state container.
pub struct App {
    pub(in crate::ui) mode: AppMode,
    pub(in crate::ui) generator: SecretGenerator,
    pub(in crate::ui) session: Option<GameSession>,
    pub(in crate::ui) turns: Vec<Turn>,
    pub(in crate::ui) input: String,
    pub(in crate::ui) reveal_secret: bool,
    pub(in crate::ui) history: GameHistory,
    pub(in crate::ui) history_view_mode: HistoryViewMode,
    pub(in crate::ui) history_page: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(generator: SecretGenerator, reveal_secret: bool, logs: LogBuffer) -> Self {
        Self {
            mode: AppMode::Menu,
            generator,
            session: None,
            turns: Vec::new(),
            input: String::new(),
            reveal_secret,
            history: GameHistory::new(),
            history_view_mode: HistoryViewMode::Stats,
            history_page: 0,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn into_history(self) -> GameHistory {
        self.history
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
