//! Unit tests for the intake service.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::*;
use crate::constants::{MAX_INTAKE_AMOUNT_ML, MIN_INTAKE_AMOUNT_ML};
use crate::errors::{Error, StoreError, ValidationError};
use crate::events::{DomainEvent, MockDomainEventSink};
use crate::Result;

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockIntakeRepository {
    records: RwLock<Vec<IntakeRecord>>,
}

impl MockIntakeRepository {
    fn with_records(records: Vec<IntakeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl IntakeRepositoryTrait for MockIntakeRepository {
    fn get_records(&self) -> Result<Vec<IntakeRecord>> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        records.retain(|r| r.id != record.id);
        records.push(record.clone());
        Ok(record)
    }

    async fn update_amount(&self, update: IntakeAmountUpdate) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| StoreError::NotFound(update.id.clone()))?;
        record.amount_ml = update.amount_ml;
        Ok(record.clone())
    }

    async fn delete(&self, record_id: &str) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        let position = records
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;
        Ok(records.remove(position))
    }
}

fn record(id: &str, amount_ml: i32) -> IntakeRecord {
    IntakeRecord {
        id: id.to_string(),
        amount_ml,
        timestamp: NaiveDate::from_ymd_opt(2025, 5, 10)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap(),
        note: None,
    }
}

fn service_with(
    repository: Arc<MockIntakeRepository>,
) -> (IntakeService, Arc<MockDomainEventSink>) {
    let sink = Arc::new(MockDomainEventSink::new());
    let service = IntakeService::new(repository, sink.clone());
    (service, sink)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_log_intake_fills_id_and_timestamp() {
    let repository = Arc::new(MockIntakeRepository::default());
    let (service, sink) = service_with(repository.clone());

    let inserted = service
        .log_intake(NewIntakeRecord::of_amount(250))
        .await
        .unwrap();

    assert!(!inserted.id.is_empty());
    assert_eq!(inserted.amount_ml, 250);
    assert_eq!(repository.get_records().unwrap().len(), 1);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        DomainEvent::IntakeChanged { record_ids } => {
            assert_eq!(record_ids, &vec![inserted.id.clone()]);
        }
        other => panic!("Expected IntakeChanged, got {:?}", other),
    }
}

#[tokio::test]
async fn test_log_intake_rejects_out_of_range_amount() {
    let repository = Arc::new(MockIntakeRepository::default());
    let (service, sink) = service_with(repository.clone());

    for amount in [0, MIN_INTAKE_AMOUNT_ML - 1, MAX_INTAKE_AMOUNT_ML + 1] {
        let result = service.log_intake(NewIntakeRecord::of_amount(amount)).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::AmountOutOfRange { .. }))
        ));
    }

    // Nothing reached the store, nothing was announced
    assert!(repository.get_records().unwrap().is_empty());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_log_intake_accepts_boundary_amounts() {
    let repository = Arc::new(MockIntakeRepository::default());
    let (service, _sink) = service_with(repository.clone());

    service
        .log_intake(NewIntakeRecord::of_amount(MIN_INTAKE_AMOUNT_ML))
        .await
        .unwrap();
    service
        .log_intake(NewIntakeRecord::of_amount(MAX_INTAKE_AMOUNT_ML))
        .await
        .unwrap();

    assert_eq!(repository.get_records().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_intake_amount_replaces_by_id() {
    let repository = Arc::new(MockIntakeRepository::with_records(vec![record("r1", 200)]));
    let (service, sink) = service_with(repository.clone());

    let updated = service
        .update_intake_amount(IntakeAmountUpdate {
            id: "r1".to_string(),
            amount_ml: 400,
        })
        .await
        .unwrap();

    assert_eq!(updated.amount_ml, 400);
    assert_eq!(repository.get_records().unwrap()[0].amount_ml, 400);
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_update_intake_amount_rejects_invalid_amount_before_store() {
    let repository = Arc::new(MockIntakeRepository::with_records(vec![record("r1", 200)]));
    let (service, sink) = service_with(repository.clone());

    let result = service
        .update_intake_amount(IntakeAmountUpdate {
            id: "r1".to_string(),
            amount_ml: 0,
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(repository.get_records().unwrap()[0].amount_ml, 200);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_delete_intake_removes_and_emits() {
    let repository = Arc::new(MockIntakeRepository::with_records(vec![
        record("r1", 200),
        record("r2", 300),
    ]));
    let (service, sink) = service_with(repository.clone());

    let removed = service.delete_intake("r1").await.unwrap();

    assert_eq!(removed.id, "r1");
    assert_eq!(repository.get_records().unwrap().len(), 1);
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_delete_missing_record_is_not_found() {
    let repository = Arc::new(MockIntakeRepository::default());
    let (service, sink) = service_with(repository);

    let result = service.delete_intake("nope").await;

    assert!(matches!(
        result,
        Err(Error::Store(StoreError::NotFound(_)))
    ));
    assert!(sink.is_empty());
}
