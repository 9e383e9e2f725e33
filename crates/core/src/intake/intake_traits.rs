use super::intake_model::{IntakeAmountUpdate, IntakeRecord, NewIntakeRecord};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for intake record store operations.
///
/// Reads are synchronous and return a cloned snapshot of the full collection;
/// the aggregation engine never sees a mutable view. Writes are async.
#[async_trait]
pub trait IntakeRepositoryTrait: Send + Sync {
    /// Returns the current full snapshot of intake records.
    fn get_records(&self) -> Result<Vec<IntakeRecord>>;

    /// Inserts a record, replacing any existing record with the same id.
    async fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord>;

    /// Replaces the amount of the record with the given id.
    async fn update_amount(&self, update: IntakeAmountUpdate) -> Result<IntakeRecord>;

    /// Deletes the record with the given id, returning the removed record.
    async fn delete(&self, record_id: &str) -> Result<IntakeRecord>;
}

/// Trait defining the contract for intake service operations.
#[async_trait]
pub trait IntakeServiceTrait: Send + Sync {
    fn get_records(&self) -> Result<Vec<IntakeRecord>>;
    async fn log_intake(&self, new_record: NewIntakeRecord) -> Result<IntakeRecord>;
    async fn update_intake_amount(&self, update: IntakeAmountUpdate) -> Result<IntakeRecord>;
    async fn delete_intake(&self, record_id: &str) -> Result<IntakeRecord>;
}
