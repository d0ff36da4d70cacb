//! Data structures for game history tracking.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How well a game went, bucketed by attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::Fair,
        PerformanceTier::NeedsImprovement,
    ];

    pub fn from_attempts(attempts: u32) -> Self {
        match attempts {
            ..=3 => PerformanceTier::Excellent,
            4..=6 => PerformanceTier::Good,
            7..=9 => PerformanceTier::Fair,
            _ => PerformanceTier::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "excellent",
            PerformanceTier::Good => "good",
            PerformanceTier::Fair => "fair",
            PerformanceTier::NeedsImprovement => "needs improvement",
        }
    }

    fn index(&self) -> usize {
        match self {
            PerformanceTier::Excellent => 0,
            PerformanceTier::Good => 1,
            PerformanceTier::Fair => 2,
            PerformanceTier::NeedsImprovement => 3,
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A completed (won) game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub timestamp: DateTime<Utc>,
    pub attempts: u32,
    pub secret: String,
}

impl GameRecord {
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_attempts(self.attempts)
    }
}

/// One row of a history report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// 1-based position in the history.
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub secret: String,
    pub attempts: u32,
    pub tier: PerformanceTier,
}

impl ReportEntry {
    pub fn new(index: usize, record: &GameRecord) -> Self {
        Self {
            index,
            timestamp: record.timestamp,
            secret: record.secret.clone(),
            attempts: record.attempts,
            tier: record.tier(),
        }
    }
}

/// Aggregated statistics across all games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_games: usize,
    pub total_attempts: u32,
    pub average_attempts: f64,
    pub best: ReportEntry,
    pub worst: ReportEntry,
    /// Games per tier, in `PerformanceTier::ALL` order.
    pub tier_counts: [usize; 4],
}

impl HistoryStats {
    /// Compute statistics from a list of game records. Ties for best and
    /// worst go to the earliest record.
    pub fn from_records(records: &[GameRecord]) -> Option<Self> {
        let first = records.first()?;

        let mut total_attempts = 0;
        let mut best = (0, first);
        let mut worst = (0, first);
        let mut tier_counts = [0; 4];

        for (i, record) in records.iter().enumerate() {
            total_attempts += record.attempts;
            tier_counts[record.tier().index()] += 1;

            if record.attempts < best.1.attempts {
                best = (i, record);
            }
            if record.attempts > worst.1.attempts {
                worst = (i, record);
            }
        }

        Some(Self {
            total_games: records.len(),
            total_attempts,
            average_attempts: total_attempts as f64 / records.len() as f64,
            best: ReportEntry::new(best.0 + 1, best.1),
            worst: ReportEntry::new(worst.0 + 1, worst.1),
            tier_counts,
        })
    }

    pub fn count_for(&self, tier: PerformanceTier) -> usize {
        self.tier_counts[tier.index()]
    }
}
