use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_menu(&self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Guess the 3-digit number. Digits never repeat and it never starts with 0.",
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![Span::styled("  1", bold), Span::raw("  Start game")]),
            Line::from(vec![Span::styled("  2", bold), Span::raw("  View game records")]),
            Line::from(vec![Span::styled("  3", bold), Span::raw("  Exit")]),
            Line::from(""),
            Line::from(format!("  Games won this run: {}", self.history.len())),
        ];

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Number Baseball | 1-3: Choose | Ctrl+Q: Quit"),
            ),
            area,
        );
    }
}
