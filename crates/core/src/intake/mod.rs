//! Intake module - domain models, services, and traits.

mod intake_model;
mod intake_service;
mod intake_traits;

#[cfg(test)]
mod intake_service_tests;

pub use intake_model::{IntakeAmountUpdate, IntakeRecord, NewIntakeRecord};
pub use intake_service::IntakeService;
pub use intake_traits::{IntakeRepositoryTrait, IntakeServiceTrait};
