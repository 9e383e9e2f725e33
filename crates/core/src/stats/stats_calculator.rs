//! Pure reducers from intake records to per-day statistics.
//!
//! Both functions are total: no inputs make them error or panic. They read
//! an immutable snapshot and the current goal value; the goal applies
//! uniformly to every day of a range (there is no per-day goal history).

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::intake::IntakeRecord;
use crate::stats::DailyStats;
use crate::utils::time_utils;

/// Reduces the full record snapshot to one day's statistics.
///
/// Filters to records whose local calendar date equals `date` (exact match),
/// sums their amounts, and returns the matching entries newest-first, the
/// order the single-day view consumes them in.
pub fn compute_daily_stats(
    records: &[IntakeRecord],
    goal_ml: i32,
    date: NaiveDate,
) -> DailyStats {
    let mut entries: Vec<IntakeRecord> = records
        .iter()
        .filter(|r| r.local_date() == date)
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let total_ml = entries.iter().map(|r| r.amount_ml).sum();

    DailyStats {
        date,
        total_ml,
        goal_ml,
        entries,
    }
}

/// Expands the record snapshot into one `DailyStats` per calendar day of
/// `[start, end]`, ascending, both endpoints inclusive.
///
/// Days with no matching records are present with a zero total and no
/// entries. An inverted range (`start > end`) produces an empty series.
///
/// Records are bucketed by calendar date in a single pass, then each day is
/// a map lookup; the cost is O(records + days) rather than re-scanning the
/// whole snapshot per day.
pub fn expand_range(
    records: &[IntakeRecord],
    goal_ml: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyStats> {
    let days = time_utils::get_days_between(start, end);
    if days.is_empty() {
        return Vec::new();
    }

    let mut entries_by_date: HashMap<NaiveDate, Vec<IntakeRecord>> = HashMap::new();
    for record in records {
        let date = record.local_date();
        if date >= start && date <= end {
            entries_by_date
                .entry(date)
                .or_default()
                .push(record.clone());
        }
    }

    days.into_iter()
        .map(|date| {
            let entries = entries_by_date.remove(&date).unwrap_or_default();
            let total_ml = entries.iter().map(|r| r.amount_ml).sum();
            DailyStats {
                date,
                total_ml,
                goal_ml,
                entries,
            }
        })
        .collect()
}
