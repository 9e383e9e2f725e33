//! Live derived values module.
//!
//! Subscribes to domain-event notifications and republishes the derived
//! statistics as continuously-updated values: one `DailyStats` for today and
//! one `Insights` over the trailing month. Bursts of change notifications
//! coalesce into a single consistent recomputation.

mod live_service;


pub use live_service::{LiveResult, LiveStatsService};
