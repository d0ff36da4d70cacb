//! History mode rendering coordinator.

mod list_view;
mod stats_view;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    history::EMPTY_REPORT_LINE,
    ui::{App, types::HistoryViewMode},
};

impl App {
    pub(in crate::ui) fn draw_history_mode(&self, f: &mut Frame, area: Rect) {
        if self.history.is_empty() {
            draw_empty_history(f, area);
            return;
        }

        match self.history_view_mode {
            HistoryViewMode::Stats => self.draw_stats_view(f, area),
            HistoryViewMode::List => self.draw_list_view(f, area),
        }
    }
}

fn draw_empty_history(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            EMPTY_REPORT_LINE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Win a game first!"),
        Line::from(""),
        Line::from(Span::styled(
            "Controls:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  Esc    - Return to Menu"),
        Line::from("  Ctrl+Q - Quit Application"),
    ];

    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Game Records")),
        area,
    );
}
