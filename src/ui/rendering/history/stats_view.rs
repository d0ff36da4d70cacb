//! Statistics dashboard rendering for history mode.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    history::{HistoryStats, PerformanceTier, ReportEntry},
    ui::App,
};

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let Some(stats) = self.history.stats() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Overall stats
                Constraint::Min(7),    // Tier distribution
            ])
            .split(area);

        draw_overall_stats(f, chunks[0], &stats);
        draw_tier_distribution(f, chunks[1], &stats);
    }
}

fn value_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn entry_summary(entry: &ReportEntry) -> String {
    format!(
        "game #{} ({} attempts, {})",
        entry.index, entry.attempts, entry.secret
    )
}

fn draw_overall_stats(f: &mut Frame, area: Rect, stats: &HistoryStats) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Games Played: "),
            Span::styled(stats.total_games.to_string(), value_style(Color::Cyan)),
            Span::raw("  |  Avg Attempts: "),
            Span::styled(
                format!("{:.1}", stats.average_attempts),
                value_style(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Best: "),
            Span::styled(entry_summary(&stats.best), value_style(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("  Worst: "),
            Span::styled(entry_summary(&stats.worst), value_style(Color::Red)),
        ]),
        Line::from(""),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Statistics | Tab: List View | Esc: Menu | Ctrl+Q: Quit"),
        ),
        area,
    );
}

fn tier_color(tier: PerformanceTier) -> Color {
    match tier {
        PerformanceTier::Excellent => Color::Green,
        PerformanceTier::Good => Color::Cyan,
        PerformanceTier::Fair => Color::Yellow,
        PerformanceTier::NeedsImprovement => Color::Red,
    }
}

fn draw_tier_distribution(f: &mut Frame, area: Rect, stats: &HistoryStats) {
    let max_count = stats.tier_counts.iter().copied().max().unwrap_or(0);

    let mut lines = vec![Line::from("")];

    for tier in PerformanceTier::ALL {
        let count = stats.count_for(tier);
        let bar_width = if max_count > 0 {
            ((count as f64 / max_count as f64) * 40.0) as usize
        } else {
            0
        };

        lines.push(Line::from(vec![
            Span::raw(format!("  {:<18}", tier.label())),
            Span::styled("█".repeat(bar_width), Style::default().fg(tier_color(tier))),
            Span::raw(format!(" {count}")),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Performance (1-3 excellent, 4-6 good, 7-9 fair, 10+ needs improvement)"),
        ),
        area,
    );
}
