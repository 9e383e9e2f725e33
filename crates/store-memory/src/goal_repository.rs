//! In-memory daily goal store.

use std::sync::RwLock;

use aqualog_core::goals::GoalRepositoryTrait;
use aqualog_core::Result;
use async_trait::async_trait;

/// The goal is a single mutable cell; `None` until the user first sets one.
#[derive(Default)]
pub struct MemoryGoalRepository {
    goal_ml: RwLock<Option<i32>>,
}

impl MemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GoalRepositoryTrait for MemoryGoalRepository {
    fn get_goal(&self) -> Result<Option<i32>> {
        Ok(*self.goal_ml.read().unwrap())
    }

    async fn replace_goal(&self, goal_ml: i32) -> Result<()> {
        *self.goal_ml.write().unwrap() = Some(goal_ml);
        Ok(())
    }
}
