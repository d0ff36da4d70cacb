//! Game list view rendering for history mode.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::{history::PAGE_SIZE, ui::App};

impl App {
    pub(in crate::ui) fn draw_list_view(&self, f: &mut Frame, area: Rect) {
        let records = self.history.page(self.history_page);
        let start_index = self.history_page * PAGE_SIZE;

        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .map(|(page_idx, record)| {
                Row::new(vec![
                    format!("{}.", start_index + page_idx + 1),
                    record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    record.secret.clone(),
                    record.attempts.to_string(),
                    record.tier().to_string(),
                ])
            })
            .collect();

        let title = format!(
            "Game Records - Page {}/{} (Showing {}-{} of {}) | PgUp/PgDn: Navigate | Tab: Stats | Esc: Menu",
            self.history_page + 1,
            self.history.total_pages(),
            start_index + 1,
            start_index + records.len(),
            self.history.len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),  // Number
                Constraint::Length(20), // Date
                Constraint::Length(8),  // Secret
                Constraint::Length(10), // Attempts
                Constraint::Length(18), // Tier
            ],
        )
        .header(
            Row::new(vec!["#", "Date", "Secret", "Attempts", "Rating"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);
    }
}
