//! Input handling and validation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{secret::DIGIT_COUNT, validator::validate};

use super::super::{
    app::App,
    types::{AppMode, HistoryViewMode, InputStatus},
};
use super::{GameHandler, HistoryHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.mode {
            AppMode::Menu => self.handle_menu_key(key),
            AppMode::Game => {
                self.handle_game_key(key);
                false
            }
            AppMode::History => {
                self.handle_history_key(key);
                false
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('1') => GameHandler::new(self.app).start_new_game(),
            KeyCode::Char('2') => HistoryHandler::new(self.app).enter_history_mode(),
            KeyCode::Char('3' | 'q' | 'Q') | KeyCode::Esc => {
                self.app.log("Exit requested");
                return true;
            }
            _ => {}
        }
        false
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let finished = self.app.session.as_ref().is_none_or(|s| s.is_won());

        if finished {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                GameHandler::new(self.app).return_to_menu();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => GameHandler::new(self.app).return_to_menu(),
            KeyCode::Enter => GameHandler::new(self.app).submit_guess(),
            KeyCode::Backspace => {
                self.app.input.pop();
            }
            KeyCode::Char(c) => GameHandler::new(self.app).push_char(c),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => HistoryHandler::new(self.app).exit_history_mode(),
            KeyCode::Tab => HistoryHandler::new(self.app).cycle_view_mode(),
            KeyCode::PageDown if self.app.history_view_mode == HistoryViewMode::List => {
                HistoryHandler::new(self.app).next_page();
            }
            KeyCode::PageUp if self.app.history_view_mode == HistoryViewMode::List => {
                HistoryHandler::new(self.app).prev_page();
            }
            _ => {}
        }
    }
}

/// Live status of a partially typed guess.
pub(in crate::ui) fn input_status(input: &str) -> InputStatus {
    if input.chars().count() < DIGIT_COUNT {
        return InputStatus::Incomplete;
    }

    match validate(input) {
        Ok(_) => InputStatus::Valid,
        Err(err) => InputStatus::Invalid(err),
    }
}
