//! Intake record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain model representing one logged water-intake event.
///
/// Immutable once created, except for `amount_ml` via an explicit
/// replace-by-id update. Timestamps are local wall-clock time; the calendar
/// day a record belongs to is its timestamp's local date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub id: String,
    pub amount_ml: i32,
    pub timestamp: NaiveDateTime,
    pub note: Option<String>,
}

impl IntakeRecord {
    /// The local calendar day this record counts toward.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Input model for logging a new intake event.
///
/// `id` and `timestamp` are optional; the service fills in a fresh UUID and
/// the current local time when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntakeRecord {
    pub id: Option<String>,
    pub amount_ml: i32,
    pub timestamp: Option<NaiveDateTime>,
    pub note: Option<String>,
}

impl NewIntakeRecord {
    /// Convenience constructor for the common "log this amount now" case.
    pub fn of_amount(amount_ml: i32) -> Self {
        Self {
            id: None,
            amount_ml,
            timestamp: None,
            note: None,
        }
    }
}

/// Input model for replacing the amount of an existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeAmountUpdate {
    pub id: String,
    pub amount_ml: i32,
}
