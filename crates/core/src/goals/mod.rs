//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;


pub use goals_model::GoalSetting;
pub use goals_service::GoalsService;
pub use goals_traits::{GoalRepositoryTrait, GoalsServiceTrait};
