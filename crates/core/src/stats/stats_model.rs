//! Daily statistics domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intake::IntakeRecord;

/// Aggregated intake statistics for one calendar day.
///
/// Always a pure projection of the record snapshot and the current goal;
/// never persisted. `entries` is exactly the set of records whose local date
/// equals `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub total_ml: i32,
    pub goal_ml: i32,
    pub entries: Vec<IntakeRecord>,
}

impl DailyStats {
    /// An empty day: no entries, zero total.
    pub fn empty(date: NaiveDate, goal_ml: i32) -> Self {
        Self {
            date,
            total_ml: 0,
            goal_ml,
            entries: Vec::new(),
        }
    }

    /// Progress toward the goal, clamped to [0, 1].
    ///
    /// A goal of zero (or below) yields 0.0 rather than dividing by zero.
    pub fn progress_percentage(&self) -> f32 {
        if self.goal_ml <= 0 {
            return 0.0;
        }
        (self.total_ml as f32 / self.goal_ml as f32).clamp(0.0, 1.0)
    }

    /// Whether the day's total met the goal.
    ///
    /// Deliberately `total >= goal` with no special case: a goal of zero is
    /// always reached. Observed reference behavior, kept as-is.
    pub fn is_goal_reached(&self) -> bool {
        self.total_ml >= self.goal_ml
    }

    /// Milliliters still to drink today, never negative.
    pub fn remaining_ml(&self) -> i32 {
        (self.goal_ml - self.total_ml).max(0)
    }
}
