//! Game screen: status line and scored guesses.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_game(&self, f: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        self.draw_game_status(f, layout[0]);
        self.draw_turns(f, layout[1]);
        self.draw_input(f, layout[2]);
    }

    fn draw_game_status(&self, f: &mut Frame, area: Rect) {
        let Some(session) = &self.session else {
            return;
        };

        let (status_text, color) = if session.is_won() {
            (
                format!(
                    "You won in {} attempts! The number was {} | Enter: Menu",
                    session.attempts(),
                    session.secret_as_text()
                ),
                Color::Green,
            )
        } else {
            let mut text = format!("Attempts: {} | Esc: Menu", session.attempts());
            if self.reveal_secret {
                text.push_str(&format!(" | Secret: {}", session.secret_as_text()));
            }
            (text, Color::White)
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Game Status")),
            area,
        );
    }

    fn draw_turns(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .turns
            .iter()
            .enumerate()
            .map(|(i, turn)| {
                let color = if turn.score.is_win() {
                    Color::Green
                } else if turn.score.is_nothing() {
                    Color::DarkGray
                } else if turn.score.strikes > 0 {
                    Color::Yellow
                } else {
                    Color::Cyan
                };

                Line::from(vec![
                    Span::raw(format!("{:>3}. ", i + 1)),
                    Span::styled(
                        format!(" {} ", turn.guess),
                        Style::default().bg(Color::DarkGray).fg(Color::White),
                    ),
                    Span::raw("  "),
                    Span::styled(turn.score.to_string(), Style::default().fg(color)),
                ])
            })
            .collect();

        // Keep the latest guesses visible.
        let height = area.height.saturating_sub(2) as usize;
        let start = lines.len().saturating_sub(height);

        f.render_widget(
            Paragraph::new(lines[start..].to_vec())
                .block(Block::default().borders(Borders::ALL).title("Guesses")),
            area,
        );
    }
}
