//! src/backend/io/mappers/snapshot_mapper.rs

use anyhow::{Context, Result};
use log::{info, warn};
use shared::CareSnapshot;

use crate::backend::domain::models::CareData;

use super::{PetMapper, RecordMapper, TaskTypeMapper};

/// Mapper between the host's JSON snapshot and the engine's typed data.
pub struct SnapshotMapper;

impl SnapshotMapper {
    /// Converts a shared snapshot to domain data.
    ///
    /// Pets and records whose dates cannot be parsed are logged and
    /// skipped. Structural problems, such as an unknown species or gender
    /// label, already fail `CareSnapshot::from_json` for the whole document.
    pub fn to_domain(snapshot: CareSnapshot) -> CareData {
        let pets = snapshot
            .pets
            .into_iter()
            .filter_map(|dto| match PetMapper::to_domain(dto) {
                Ok(pet) => Some(pet),
                Err(e) => {
                    warn!("Skipping pet: {:#}", e);
                    None
                }
            })
            .collect();
        let task_types = snapshot
            .task_types
            .into_iter()
            .map(TaskTypeMapper::to_domain)
            .collect();
        let records = snapshot
            .records
            .into_iter()
            .filter_map(|dto| match RecordMapper::to_domain(dto) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping record: {:#}", e);
                    None
                }
            })
            .collect();

        CareData::new(pets, task_types, records)
    }

    /// Converts domain data back to a shared snapshot.
    pub fn to_dto(data: &CareData) -> CareSnapshot {
        CareSnapshot {
            pets: data.pets.iter().map(PetMapper::to_dto).collect(),
            task_types: data.task_types.iter().map(TaskTypeMapper::to_dto).collect(),
            records: data.records.iter().map(RecordMapper::to_dto).collect(),
        }
    }

    /// Parse a JSON snapshot exported by the host
    pub fn from_json(json: &str) -> Result<CareData> {
        let snapshot = CareSnapshot::from_json(json).context("Failed to parse care snapshot JSON")?;
        let data = Self::to_domain(snapshot);
        info!(
            "Loaded snapshot with {} pets, {} task types and {} records",
            data.pets.len(),
            data.task_types.len(),
            data.records.len()
        );
        Ok(data)
    }

    pub fn to_json(data: &CareData) -> Result<String> {
        Self::to_dto(data)
            .to_json()
            .context("Failed to serialize care snapshot")
    }
}
