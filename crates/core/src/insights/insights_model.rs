//! Insights domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::DailyStats;

/// Rollup metrics over a date-range series of daily statistics.
///
/// Derived entirely from a `DailyStats` series; no independent lifecycle.
/// `weekly_trend` is the trailing 7-day slice of the series (inclusive of
/// "today"); `monthly_trend` is the full requested series. Both ascend by
/// date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub average_intake: i32,
    pub total_intake: i32,
    pub completion_rate: f32,
    pub longest_streak: u32,
    pub active_day_count: u32,
    pub total_entry_count: u32,
    pub average_entries_per_active_day: f32,
    pub max_single_entry_amount: i32,
    pub peak_day: Option<NaiveDate>,
    pub peak_day_intake: i32,
    pub weekly_trend: Vec<DailyStats>,
    pub monthly_trend: Vec<DailyStats>,
}

impl Insights {
    /// The all-zero value returned for an empty input series.
    pub fn empty() -> Self {
        Self {
            average_intake: 0,
            total_intake: 0,
            completion_rate: 0.0,
            longest_streak: 0,
            active_day_count: 0,
            total_entry_count: 0,
            average_entries_per_active_day: 0.0,
            max_single_entry_amount: 0,
            peak_day: None,
            peak_day_intake: 0,
            weekly_trend: Vec::new(),
            monthly_trend: Vec::new(),
        }
    }

    /// Completion rate as a whole percentage, truncated.
    pub fn completion_percentage(&self) -> i32 {
        (self.completion_rate * 100.0) as i32
    }
}
