/// Daily goal used when the store holds no explicit value, in milliliters.
pub const DEFAULT_DAILY_GOAL_ML: i32 = 2000;

/// Lowest accepted daily goal, in milliliters.
pub const MIN_GOAL_ML: i32 = 500;

/// Highest accepted daily goal, in milliliters.
pub const MAX_GOAL_ML: i32 = 10_000;

/// Lowest accepted single intake amount, in milliliters.
pub const MIN_INTAKE_AMOUNT_ML: i32 = 1;

/// Highest accepted single intake amount, in milliliters.
pub const MAX_INTAKE_AMOUNT_ML: i32 = 5_000;

/// Length of the weekly trend window, in calendar days, inclusive of today.
pub const WEEKLY_TREND_DAYS: i64 = 7;

/// Debounce window for coalescing change notifications before a recompute.
pub const LIVE_DEBOUNCE_MS: u64 = 100;
