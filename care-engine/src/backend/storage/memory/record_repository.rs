use anyhow::{anyhow, bail, Result};
use log::{debug, info};

use crate::backend::domain::models::{NewRecord, Record, RecordUpdate};
use crate::backend::storage::traits::RecordStorage;

use super::connection::MemoryConnection;

#[derive(Clone)]
pub struct RecordRepository {
    connection: MemoryConnection,
}

impl RecordRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl RecordStorage for RecordRepository {
    fn store_record(&self, new_record: NewRecord) -> Result<Record> {
        let mut data = self.connection.write()?;

        if !data.pets.iter().any(|p| p.id == new_record.pet_id) {
            bail!("Cannot log record for unknown pet {}", new_record.pet_id);
        }
        if !data.task_types.iter().any(|t| t.id == new_record.task_type_id) {
            bail!("Cannot log record for unknown task type {}", new_record.task_type_id);
        }

        let id = new_record.id.unwrap_or_else(Record::generate_id);
        if data.records.iter().any(|r| r.id == id) {
            bail!("Record with id {} already exists", id);
        }

        let record = Record {
            id,
            pet_id: new_record.pet_id,
            task_type_id: new_record.task_type_id,
            date: new_record.date,
            value: new_record.value,
            note: new_record.note,
        };
        debug!(
            "Logged {} for pet {} at {}",
            record.task_type_id, record.pet_id, record.date
        );
        data.records.push(record.clone());
        Ok(record)
    }

    fn get_record(&self, record_id: &str) -> Result<Option<Record>> {
        let data = self.connection.read()?;
        Ok(data.records.iter().find(|r| r.id == record_id).cloned())
    }

    fn list_records(&self, pet_id: Option<&str>) -> Result<Vec<Record>> {
        let data = self.connection.read()?;
        let mut records: Vec<Record> = data
            .records
            .iter()
            .filter(|r| pet_id.map_or(true, |id| r.pet_id == id))
            .cloned()
            .collect();
        records.sort_by(Record::recency_cmp);
        Ok(records)
    }

    fn update_record(&self, record_id: &str, update: RecordUpdate) -> Result<Record> {
        let mut data = self.connection.write()?;
        let existing = data
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| anyhow!("Record {} not found", record_id))?;

        *existing = existing.with_update(update);
        info!("Updated record {}", record_id);
        Ok(existing.clone())
    }

    fn delete_record(&self, record_id: &str) -> Result<bool> {
        let mut data = self.connection.write()?;
        let before = data.records.len();
        data.records.retain(|r| r.id != record_id);
        Ok(data.records.len() < before)
    }
}
