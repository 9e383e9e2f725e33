use log::debug;
use std::sync::Arc;

use chrono::{Months, NaiveDate};

use crate::insights::insights_calculator::compute_insights;
use crate::insights::Insights;
use crate::stats::StatsServiceTrait;
use crate::Result;

// Define the trait for the insights service
pub trait InsightsServiceTrait: Send + Sync {
    /// Insights over an explicit date range, reduced against `today`.
    fn get_insights(&self, start: NaiveDate, end: NaiveDate, today: NaiveDate)
        -> Result<Insights>;

    /// Insights over the trailing calendar month ending today.
    fn get_monthly_insights(&self, today: NaiveDate) -> Result<Insights>;
}

pub struct InsightsService {
    stats_service: Arc<dyn StatsServiceTrait>,
}

impl InsightsService {
    pub fn new(stats_service: Arc<dyn StatsServiceTrait>) -> Self {
        InsightsService { stats_service }
    }
}

impl InsightsServiceTrait for InsightsService {
    fn get_insights(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Insights> {
        debug!("Computing insights for {} to {}", start, end);
        let series = self.stats_service.get_stats_range(start, end)?;
        Ok(compute_insights(&series, today))
    }

    fn get_monthly_insights(&self, today: NaiveDate) -> Result<Insights> {
        let one_month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        self.get_insights(one_month_ago, today, today)
    }
}
