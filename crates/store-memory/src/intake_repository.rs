//! In-memory intake record store.

use std::sync::RwLock;

use aqualog_core::errors::StoreError;
use aqualog_core::intake::{IntakeAmountUpdate, IntakeRecord, IntakeRepositoryTrait};
use aqualog_core::Result;
use async_trait::async_trait;

/// Keyed in-memory intake record store.
///
/// Records keep insertion order; an insert with an existing id replaces that
/// record in place. Reads return cloned snapshots, so callers never observe
/// a partially-applied write.
#[derive(Default)]
pub struct MemoryIntakeRepository {
    records: RwLock<Vec<IntakeRecord>>,
}

impl MemoryIntakeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IntakeRepositoryTrait for MemoryIntakeRepository {
    fn get_records(&self) -> Result<Vec<IntakeRecord>> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(record)
    }

    async fn update_amount(&self, update: IntakeAmountUpdate) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| StoreError::NotFound(format!("intake record {}", update.id)))?;
        record.amount_ml = update.amount_ml;
        Ok(record.clone())
    }

    async fn delete(&self, record_id: &str) -> Result<IntakeRecord> {
        let mut records = self.records.write().unwrap();
        let position = records
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| StoreError::NotFound(format!("intake record {}", record_id)))?;
        Ok(records.remove(position))
    }
}
