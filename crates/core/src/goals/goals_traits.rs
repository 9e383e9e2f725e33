use crate::Result;
use async_trait::async_trait;

/// Trait for goal store operations.
///
/// `get_goal` returns `None` when the user never set a goal; the service
/// layer substitutes the default.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_goal(&self) -> Result<Option<i32>>;
    async fn replace_goal(&self, goal_ml: i32) -> Result<()>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalsServiceTrait: Send + Sync {
    fn get_goal(&self) -> Result<i32>;
    async fn update_goal(&self, goal_ml: i32) -> Result<()>;
}
