//! In-memory reminder settings store.

use std::sync::RwLock;

use aqualog_core::settings::{ReminderSettings, SettingsRepositoryTrait};
use aqualog_core::Result;
use async_trait::async_trait;

#[derive(Default)]
pub struct MemorySettingsRepository {
    settings: RwLock<Option<ReminderSettings>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MemorySettingsRepository {
    fn get_reminder_settings(&self) -> Result<Option<ReminderSettings>> {
        Ok(self.settings.read().unwrap().clone())
    }

    async fn update_reminder_settings(&self, settings: &ReminderSettings) -> Result<()> {
        *self.settings.write().unwrap() = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqualog_core::settings::ReminderSound;

    #[tokio::test]
    async fn test_settings_round_trip() {
        let repository = MemorySettingsRepository::new();
        assert_eq!(repository.get_reminder_settings().unwrap(), None);

        let settings = ReminderSettings {
            is_enabled: true,
            sound: ReminderSound::ZenithBell,
            ..ReminderSettings::default()
        };
        repository.update_reminder_settings(&settings).await.unwrap();

        assert_eq!(repository.get_reminder_settings().unwrap(), Some(settings));
    }
}
