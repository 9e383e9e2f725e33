//! Settings module - reminder preferences models, services, and traits.
//!
//! Holds the reminder preference data only; scheduling and notification
//! delivery are platform concerns outside this crate.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{ReminderSettings, ReminderSound};
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
