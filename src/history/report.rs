//! Structured and rendered history reports.

use serde::Serialize;

use super::types::{HistoryStats, ReportEntry};

pub const EMPTY_REPORT_LINE: &str = "No game records yet.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HistoryReport {
    Empty,
    Summary {
        entries: Vec<ReportEntry>,
        stats: HistoryStats,
    },
}

impl HistoryReport {
    pub fn is_empty(&self) -> bool {
        matches!(self, HistoryReport::Empty)
    }

    pub fn lines(&self) -> Vec<String> {
        let (entries, stats) = match self {
            HistoryReport::Empty => return vec![EMPTY_REPORT_LINE.to_string()],
            HistoryReport::Summary { entries, stats } => (entries, stats),
        };

        let mut lines: Vec<String> = entries.iter().map(entry_line).collect();

        lines.push(String::new());
        lines.push(format!("Games played: {}", stats.total_games));
        lines.push(format!("Average attempts: {:.1}", stats.average_attempts));
        lines.push(format!(
            "Best: game #{} ({} attempts, secret {})",
            stats.best.index, stats.best.attempts, stats.best.secret
        ));
        lines.push(format!(
            "Worst: game #{} ({} attempts, secret {})",
            stats.worst.index, stats.worst.attempts, stats.worst.secret
        ));

        lines
    }
}

fn entry_line(entry: &ReportEntry) -> String {
    format!(
        "{}. {} | secret {} | {} attempts | {}",
        entry.index,
        entry.timestamp.format(TIMESTAMP_FORMAT),
        entry.secret,
        entry.attempts,
        entry.tier
    )
}
