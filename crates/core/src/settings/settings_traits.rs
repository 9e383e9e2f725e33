//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::ReminderSettings;

/// Repository trait for reminder settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Returns the stored reminder settings, or `None` if never saved.
    fn get_reminder_settings(&self) -> Result<Option<ReminderSettings>>;

    /// Replaces the stored reminder settings.
    async fn update_reminder_settings(&self, settings: &ReminderSettings) -> Result<()>;
}
