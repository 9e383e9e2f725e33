//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. The live stats
/// worker translates them into recomputations of the derived values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Intake records were created, updated, or deleted.
    IntakeChanged { record_ids: Vec<String> },

    /// The daily goal was replaced.
    GoalChanged { goal_ml: i32 },
}

impl DomainEvent {
    /// Creates an IntakeChanged event.
    pub fn intake_changed(record_ids: Vec<String>) -> Self {
        Self::IntakeChanged { record_ids }
    }

    /// Creates a GoalChanged event.
    pub fn goal_changed(goal_ml: i32) -> Self {
        Self::GoalChanged { goal_ml }
    }
}
