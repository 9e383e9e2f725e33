use log::debug;
use std::sync::Arc;

use crate::constants::{DEFAULT_DAILY_GOAL_ML, MAX_GOAL_ML, MIN_GOAL_ML};
use crate::errors::ValidationError;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{GoalRepositoryTrait, GoalsServiceTrait};
use crate::Result;
use async_trait::async_trait;

/// Service for reading and replacing the daily goal.
pub struct GoalsService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalsService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            goal_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl GoalsServiceTrait for GoalsService {
    fn get_goal(&self) -> Result<i32> {
        Ok(self
            .goal_repository
            .get_goal()?
            .unwrap_or(DEFAULT_DAILY_GOAL_ML))
    }

    async fn update_goal(&self, goal_ml: i32) -> Result<()> {
        if !(MIN_GOAL_ML..=MAX_GOAL_ML).contains(&goal_ml) {
            return Err(ValidationError::GoalOutOfRange {
                goal_ml,
                min_ml: MIN_GOAL_ML,
                max_ml: MAX_GOAL_ML,
            }
            .into());
        }

        self.goal_repository.replace_goal(goal_ml).await?;
        debug!("Daily goal replaced with {}ml", goal_ml);

        self.event_sink.emit(DomainEvent::goal_changed(goal_ml));
        Ok(())
    }
}
