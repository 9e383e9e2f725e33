//! Pure reducer from a daily statistics series to rollup insights.

use chrono::{Duration, NaiveDate};

use crate::constants::WEEKLY_TREND_DAYS;
use crate::insights::Insights;
use crate::stats::DailyStats;

/// Reduces a per-day series into rollup insight metrics.
///
/// The input is expected ascending by date but the reducer re-sorts
/// defensively rather than trusting caller order. An empty series yields
/// `Insights::empty()`; no input makes this error or divide by zero.
pub fn compute_insights(series: &[DailyStats], today: NaiveDate) -> Insights {
    if series.is_empty() {
        return Insights::empty();
    }

    let mut sorted: Vec<DailyStats> = series.to_vec();
    sorted.sort_by_key(|s| s.date);

    let total_intake: i32 = sorted.iter().map(|s| s.total_ml).sum();
    let average_intake = total_intake / sorted.len() as i32;

    let days_met_goal = sorted.iter().filter(|s| s.is_goal_reached()).count();
    let completion_rate = days_met_goal as f32 / sorted.len() as f32;

    let longest_streak = longest_streak(&sorted);

    let active_day_count = sorted.iter().filter(|s| !s.entries.is_empty()).count() as u32;
    let total_entry_count = sorted.iter().map(|s| s.entries.len()).sum::<usize>() as u32;
    let average_entries_per_active_day = if active_day_count > 0 {
        total_entry_count as f32 / active_day_count as f32
    } else {
        0.0
    };

    let max_single_entry_amount = sorted
        .iter()
        .flat_map(|s| s.entries.iter())
        .map(|e| e.amount_ml)
        .max()
        .unwrap_or(0);

    // First maximum in ascending-date order; ties resolve to the earliest
    // day so a given input always reproduces the same peak.
    let peak = sorted
        .iter()
        .fold(None::<&DailyStats>, |best, stat| match best {
            Some(current) if stat.total_ml > current.total_ml => Some(stat),
            None => Some(stat),
            _ => best,
        });
    let peak_day = peak.map(|s| s.date);
    let peak_day_intake = peak.map(|s| s.total_ml).unwrap_or(0);

    let week_start = today - Duration::days(WEEKLY_TREND_DAYS - 1);
    let weekly_trend: Vec<DailyStats> = sorted
        .iter()
        .filter(|s| s.date >= week_start)
        .cloned()
        .collect();

    Insights {
        average_intake,
        total_intake,
        completion_rate,
        longest_streak,
        active_day_count,
        total_entry_count,
        average_entries_per_active_day,
        max_single_entry_amount,
        peak_day,
        peak_day_intake,
        weekly_trend,
        monthly_trend: sorted,
    }
}

/// Longest run of consecutive days with the goal reached.
///
/// The running counter is folded into the maximum on every miss AND once
/// after the walk; the final fold is what counts a streak that runs through
/// the last day of the series.
fn longest_streak(sorted: &[DailyStats]) -> u32 {
    let mut max_streak: u32 = 0;
    let mut current_streak: u32 = 0;

    for stat in sorted {
        if stat.is_goal_reached() {
            current_streak += 1;
        } else {
            max_streak = max_streak.max(current_streak);
            current_streak = 0;
        }
    }
    max_streak.max(current_streak)
}
