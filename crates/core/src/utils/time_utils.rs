use chrono::{Local, NaiveDate, NaiveDateTime};

/// Returns today's date on the local wall clock.
///
/// This is the single source of truth for deriving "today" in the engine.
/// The domain is a single-user local log, so calendar days are local days;
/// no timezone conversion is applied.
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the current local wall-clock time, used to stamp new records.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            // Should not happen for typical date ranges
            break;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_days_between_inclusive() {
        let days = get_days_between(date(2025, 3, 30), date(2025, 4, 2));
        assert_eq!(
            days,
            vec![
                date(2025, 3, 30),
                date(2025, 3, 31),
                date(2025, 4, 1),
                date(2025, 4, 2),
            ]
        );
    }

    #[test]
    fn test_get_days_between_single_day() {
        let days = get_days_between(date(2025, 6, 15), date(2025, 6, 15));
        assert_eq!(days, vec![date(2025, 6, 15)]);
    }

    #[test]
    fn test_get_days_between_inverted_range_is_empty() {
        assert!(get_days_between(date(2025, 6, 16), date(2025, 6, 15)).is_empty());
    }
}
