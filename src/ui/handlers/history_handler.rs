//! History mode state management.

use super::super::{
    app::App,
    types::{AppMode, HistoryViewMode},
};

/// Helper struct for managing history mode state and operations.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter_history_mode(&mut self) {
        self.app.mode = AppMode::History;
        self.app.history_view_mode = HistoryViewMode::Stats;
        self.app.history_page = 0;
        self.app.log(format!(
            "Viewing game records ({} game(s))",
            self.app.history.len()
        ));
    }

    pub fn exit_history_mode(&mut self) {
        self.app.mode = AppMode::Menu;
    }

    /// Switch between the statistics dashboard and the game list.
    pub fn cycle_view_mode(&mut self) {
        self.app.history_view_mode = match self.app.history_view_mode {
            HistoryViewMode::Stats => HistoryViewMode::List,
            HistoryViewMode::List => HistoryViewMode::Stats,
        };
    }

    /// Go to the next page in list view.
    pub fn next_page(&mut self) {
        if self.app.history_page + 1 < self.app.history.total_pages() {
            self.app.history_page += 1;
        }
    }

    /// Go to the previous page in list view.
    pub fn prev_page(&mut self) {
        self.app.history_page = self.app.history_page.saturating_sub(1);
    }
}
