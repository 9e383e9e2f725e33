use log::debug;
use std::sync::Arc;

use crate::errors::ValidationError;
use crate::settings::{ReminderSettings, SettingsRepositoryTrait};
use crate::Result;
use async_trait::async_trait;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_reminder_settings(&self) -> Result<ReminderSettings>;

    async fn update_reminder_settings(&self, settings: ReminderSettings) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_reminder_settings(&self) -> Result<ReminderSettings> {
        Ok(self
            .settings_repository
            .get_reminder_settings()?
            .unwrap_or_default())
    }

    async fn update_reminder_settings(&self, settings: ReminderSettings) -> Result<()> {
        if settings.frequency_minutes == 0 {
            return Err(ValidationError::InvalidInput(
                "Reminder frequency must be at least one minute".to_string(),
            )
            .into());
        }
        if settings.start_time >= settings.end_time {
            return Err(ValidationError::InvalidInput(format!(
                "Reminder window start {} must be before end {}",
                settings.start_time, settings.end_time
            ))
            .into());
        }

        self.settings_repository
            .update_reminder_settings(&settings)
            .await?;
        debug!(
            "Reminder settings updated (enabled: {}, every {} min)",
            settings.is_enabled, settings.frequency_minutes
        );
        Ok(())
    }
}
