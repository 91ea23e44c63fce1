use anyhow::{anyhow, Result};
use log::info;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::clock::{Clock, SystemClock};
use crate::backend::config::EngineConfig;
use crate::backend::domain::models::{CareData, TaskType};
use crate::backend::storage::traits::Connection;

use super::{PetRepository, RecordRepository, TaskTypeRepository};

/// MemoryConnection owns the shared entity state and the settings the
/// repositories need when they create derived records
#[derive(Clone)]
pub struct MemoryConnection {
    state: Arc<RwLock<CareData>>,
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl MemoryConnection {
    /// Create an empty store using the system clock
    pub fn new(config: EngineConfig) -> Self {
        Self::from_data(CareData::default(), config, Arc::new(SystemClock))
    }

    /// Create a store seeded with the built-in task catalog
    pub fn with_default_catalog(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let data = CareData::new(Vec::new(), TaskType::default_catalog(), Vec::new());
        info!("Seeding memory store with {} default task types", data.task_types.len());
        Self::from_data(data, config, clock)
    }

    /// Wrap existing data, e.g. a snapshot loaded by the host
    pub fn from_data(data: CareData, config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(RwLock::new(data)),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, CareData>> {
        self.state
            .read()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, CareData>> {
        self.state
            .write()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl Connection for MemoryConnection {
    type PetRepository = PetRepository;
    type TaskTypeRepository = TaskTypeRepository;
    type RecordRepository = RecordRepository;

    fn create_pet_repository(&self) -> PetRepository {
        PetRepository::new(self.clone())
    }

    fn create_task_type_repository(&self) -> TaskTypeRepository {
        TaskTypeRepository::new(self.clone())
    }

    fn create_record_repository(&self) -> RecordRepository {
        RecordRepository::new(self.clone())
    }

    fn snapshot(&self) -> Result<CareData> {
        Ok(self.read()?.clone())
    }
}
