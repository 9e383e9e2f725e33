//! Daily statistics module.
//!
//! Pure reducers that turn the intake record snapshot plus the current goal
//! into per-day statistics, either for a single day or expanded across a
//! date range, and the service that feeds them fresh store snapshots.

mod stats_calculator;
mod stats_model;
mod stats_service;
mod stats_traits;


pub use stats_calculator::{compute_daily_stats, expand_range};
pub use stats_model::DailyStats;
pub use stats_service::StatsService;
pub use stats_traits::StatsServiceTrait;
