use log::debug;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::constants::DEFAULT_DAILY_GOAL_ML;
use crate::goals::GoalRepositoryTrait;
use crate::intake::IntakeRepositoryTrait;
use crate::stats::stats_calculator::{compute_daily_stats, expand_range};
use crate::stats::{DailyStats, StatsServiceTrait};
use crate::Result;

/// Service deriving daily statistics from fresh store snapshots.
pub struct StatsService {
    intake_repository: Arc<dyn IntakeRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl StatsService {
    pub fn new(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        Self {
            intake_repository,
            goal_repository,
        }
    }

    fn current_goal(&self) -> Result<i32> {
        Ok(self
            .goal_repository
            .get_goal()?
            .unwrap_or(DEFAULT_DAILY_GOAL_ML))
    }
}

impl StatsServiceTrait for StatsService {
    fn get_daily_stats(&self, date: NaiveDate) -> Result<DailyStats> {
        let records = self.intake_repository.get_records()?;
        let goal_ml = self.current_goal()?;
        Ok(compute_daily_stats(&records, goal_ml, date))
    }

    fn get_stats_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyStats>> {
        debug!("Expanding stats range {} to {}", start, end);
        let records = self.intake_repository.get_records()?;
        let goal_ml = self.current_goal()?;
        Ok(expand_range(&records, goal_ml, start, end))
    }
}
