//! Reminder settings domain models.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Reminder sound choice. Selection only; playback is a platform concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderSound {
    #[default]
    Default,
    MartianDrip,
    LifeStream,
    ZenithBell,
}

/// User preferences for hydration reminders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub is_enabled: bool,
    pub frequency_minutes: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub sound: ReminderSound,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            is_enabled: false,
            frequency_minutes: 60,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            sound: ReminderSound::Default,
        }
    }
}
