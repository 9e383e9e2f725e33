//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DAILY_GOAL_ML;

/// The single current daily goal, in milliliters.
///
/// The goal is not historized: there is one mutable cell, read fresh at
/// aggregation time, and it applies retroactively to every day of a computed
/// range. Tracking per-day goal history is a deliberate non-feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSetting {
    pub goal_ml: i32,
}

impl Default for GoalSetting {
    fn default() -> Self {
        Self {
            goal_ml: DEFAULT_DAILY_GOAL_ML,
        }
    }
}
