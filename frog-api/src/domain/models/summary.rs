use itertools::Itertools;

use super::Entry;

/// Aggregate activity statistics over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySummary {
    /// Sum of durations of entries that are not excluded.
    pub total_activity: f64,
    /// Number of distinct dates with at least one entry.
    pub active_days: usize,
    /// `total_activity / active_days`, or 0 when there are no active days.
    pub average_daily_activity: f64,
}

impl ActivitySummary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let total_activity: f64 = entries
            .iter()
            .filter(|entry| !entry.exclude)
            .map(|entry| entry.duration)
            .sum();

        let active_days = entries.iter().map(|entry| entry.date).unique().count();

        let average_daily_activity = if active_days == 0 {
            0.0
        } else {
            total_activity / active_days as f64
        };

        Self {
            total_activity,
            active_days,
            average_daily_activity,
        }
    }
}
