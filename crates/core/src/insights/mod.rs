//! Insights module.
//!
//! Reduces a per-day statistics series into rollup metrics: averages,
//! completion rate, streaks, peak day, activity counts, and trend series.

mod insights_calculator;
mod insights_model;
mod insights_service;


pub use insights_calculator::compute_insights;
pub use insights_model::Insights;
pub use insights_service::{InsightsService, InsightsServiceTrait};
