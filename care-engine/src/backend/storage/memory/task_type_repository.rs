use anyhow::{bail, Result};
use log::{info, warn};

use crate::backend::domain::models::TaskType;
use crate::backend::storage::traits::TaskTypeStorage;

use super::connection::MemoryConnection;

#[derive(Clone)]
pub struct TaskTypeRepository {
    connection: MemoryConnection,
}

impl TaskTypeRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl TaskTypeStorage for TaskTypeRepository {
    fn store_task_type(&self, task_type: &TaskType) -> Result<()> {
        task_type.validate()?;

        let mut data = self.connection.write()?;
        if data.task_types.iter().any(|t| t.id == task_type.id) {
            bail!("Task type with id {} already exists", task_type.id);
        }
        data.task_types.push(task_type.clone());
        info!("Stored task type {} ({})", task_type.name, task_type.id);
        Ok(())
    }

    fn get_task_type(&self, task_type_id: &str) -> Result<Option<TaskType>> {
        let data = self.connection.read()?;
        Ok(data.task_types.iter().find(|t| t.id == task_type_id).cloned())
    }

    fn list_task_types(&self) -> Result<Vec<TaskType>> {
        Ok(self.connection.read()?.task_types.clone())
    }

    fn update_task_type(&self, task_type: &TaskType) -> Result<()> {
        task_type.validate()?;

        let mut data = self.connection.write()?;
        match data.task_types.iter_mut().find(|t| t.id == task_type.id) {
            Some(existing) => {
                *existing = task_type.clone();
                info!("Updated task type {}", task_type.id);
                Ok(())
            }
            None => bail!("Task type {} not found", task_type.id),
        }
    }

    fn delete_task_type(&self, task_type_id: &str) -> Result<bool> {
        let mut data = self.connection.write()?;
        let before = data.task_types.len();
        data.task_types.retain(|t| t.id != task_type_id);
        if data.task_types.len() == before {
            return Ok(false);
        }

        let orphaned = data.records.iter().filter(|r| r.task_type_id == task_type_id).count();
        if orphaned > 0 {
            warn!("Task type {} deleted, leaving {} orphaned records", task_type_id, orphaned);
        }
        Ok(true)
    }
}
