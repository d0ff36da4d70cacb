mod game;
mod history;
mod input_field;
mod logs;
mod menu;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::AppMode};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Mode content
                Constraint::Length(6), // Small log panel
            ])
            .split(f.area());

        match self.mode {
            AppMode::Menu => self.draw_menu(f, layout[0]),
            AppMode::Game => self.draw_game(f, layout[0]),
            AppMode::History => self.draw_history_mode(f, layout[0]),
        }

        self.draw_logs(f, layout[1]);
    }
}
