use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::{MAX_INTAKE_AMOUNT_ML, MIN_INTAKE_AMOUNT_ML};
use crate::errors::ValidationError;
use crate::events::{DomainEvent, DomainEventSink};
use crate::intake::intake_model::{IntakeAmountUpdate, IntakeRecord, NewIntakeRecord};
use crate::intake::{IntakeRepositoryTrait, IntakeServiceTrait};
use crate::utils::time_utils;
use crate::Result;
use async_trait::async_trait;

/// Service for managing intake records.
///
/// Validates amounts before the store is touched and emits an
/// `IntakeChanged` event after each successful mutation. The aggregation
/// engine downstream only ever sees records that passed validation.
pub struct IntakeService {
    intake_repository: Arc<dyn IntakeRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl IntakeService {
    /// Creates a new IntakeService instance with injected dependencies.
    pub fn new(
        intake_repository: Arc<dyn IntakeRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            intake_repository,
            event_sink,
        }
    }

    fn validate_amount(amount_ml: i32) -> Result<()> {
        if !(MIN_INTAKE_AMOUNT_ML..=MAX_INTAKE_AMOUNT_ML).contains(&amount_ml) {
            return Err(ValidationError::AmountOutOfRange {
                amount_ml,
                min_ml: MIN_INTAKE_AMOUNT_ML,
                max_ml: MAX_INTAKE_AMOUNT_ML,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl IntakeServiceTrait for IntakeService {
    fn get_records(&self) -> Result<Vec<IntakeRecord>> {
        self.intake_repository.get_records()
    }

    async fn log_intake(&self, new_record: NewIntakeRecord) -> Result<IntakeRecord> {
        Self::validate_amount(new_record.amount_ml)?;

        let record = IntakeRecord {
            id: new_record
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount_ml: new_record.amount_ml,
            timestamp: new_record.timestamp.unwrap_or_else(time_utils::local_now),
            note: new_record.note,
        };

        let inserted = self.intake_repository.insert(record).await?;
        debug!("Logged intake {} ({}ml)", inserted.id, inserted.amount_ml);

        self.event_sink
            .emit(DomainEvent::intake_changed(vec![inserted.id.clone()]));
        Ok(inserted)
    }

    async fn update_intake_amount(&self, update: IntakeAmountUpdate) -> Result<IntakeRecord> {
        Self::validate_amount(update.amount_ml)?;

        let updated = self.intake_repository.update_amount(update).await?;
        debug!("Updated intake {} to {}ml", updated.id, updated.amount_ml);

        self.event_sink
            .emit(DomainEvent::intake_changed(vec![updated.id.clone()]));
        Ok(updated)
    }

    async fn delete_intake(&self, record_id: &str) -> Result<IntakeRecord> {
        let removed = self.intake_repository.delete(record_id).await?;
        debug!("Deleted intake {}", removed.id);

        self.event_sink
            .emit(DomainEvent::intake_changed(vec![removed.id.clone()]));
        Ok(removed)
    }
}
