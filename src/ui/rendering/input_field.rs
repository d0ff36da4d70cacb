//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, handlers::input_status, types::InputStatus};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = input_status(&self.input);

        let (border_color, subtitle) = match status {
            InputStatus::Incomplete => (Color::Gray, String::new()),
            InputStatus::Valid => (Color::Green, String::new()),
            InputStatus::Invalid(err) => (Color::Red, err.to_string()),
        };

        let text = format!("{}▌", self.input);

        let help_text = if self.session.as_ref().is_some_and(|s| s.is_won()) {
            "Enter = menu | Ctrl+Q = quit"
        } else {
            "Enter = submit | Esc = menu | Ctrl+Q = quit"
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }
}
