use chrono::NaiveDate;

use crate::stats::DailyStats;
use crate::Result;

/// Trait for reading derived daily statistics.
///
/// Implementations read fresh store snapshots on every call; results are
/// pure projections, never cached or persisted.
pub trait StatsServiceTrait: Send + Sync {
    /// Statistics for a single calendar day.
    fn get_daily_stats(&self, date: NaiveDate) -> Result<DailyStats>;

    /// One `DailyStats` per day of `[start, end]`, ascending, inclusive.
    /// An inverted range yields an empty series.
    fn get_stats_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyStats>>;
}
