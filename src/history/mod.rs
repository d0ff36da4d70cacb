//! Append-only record of won games and the statistics derived from it.

mod report;
mod types;

pub use report::{EMPTY_REPORT_LINE, HistoryReport};
pub use types::{GameRecord, HistoryStats, PerformanceTier, ReportEntry};

use chrono::{DateTime, Utc};
use tracing::info;

/// Records shown per page in the history list.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    records: Vec<GameRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, attempts: u32, secret: impl Into<String>) {
        self.add_record_at(attempts, secret, Utc::now());
    }

    pub fn add_record_at(
        &mut self,
        attempts: u32,
        secret: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        debug_assert!(attempts >= 1, "a won game takes at least one attempt");

        let record = GameRecord {
            timestamp,
            attempts,
            secret: secret.into(),
        };
        info!(
            "Recorded game #{}: secret {} in {} attempt(s)",
            self.records.len() + 1,
            record.secret,
            record.attempts
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> Option<HistoryStats> {
        HistoryStats::from_records(&self.records)
    }

    pub fn report(&self) -> HistoryReport {
        match self.stats() {
            None => HistoryReport::Empty,
            Some(stats) => HistoryReport::Summary {
                entries: self
                    .records
                    .iter()
                    .enumerate()
                    .map(|(i, record)| ReportEntry::new(i + 1, record))
                    .collect(),
                stats,
            },
        }
    }

    /// Get the total number of pages for pagination.
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Get records for a specific page (0-indexed).
    pub fn page(&self, page: usize) -> &[GameRecord] {
        let start = page * PAGE_SIZE;
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }
}
