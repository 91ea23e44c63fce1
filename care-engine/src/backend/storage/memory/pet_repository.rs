//! # Memory Pet Repository
//!
//! Pets plus the two lifecycle rules attached to them: a new pet gets an
//! initial weight record, and a deleted pet takes its records with it.

use anyhow::{bail, Result};
use log::{debug, info};

use crate::backend::domain::models::{Pet, Record};
use crate::backend::storage::traits::PetStorage;

use super::connection::MemoryConnection;

#[derive(Clone)]
pub struct PetRepository {
    connection: MemoryConnection,
}

impl PetRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }

    /// The weight record logged alongside a newly created pet, if the
    /// weight task type is present in the catalog
    fn initial_weight_record(&self, pet: &Pet, has_weight_task: bool) -> Option<Record> {
        if !has_weight_task {
            return None;
        }
        let config = self.connection.config();
        Some(Record {
            id: Record::initial_weight_id(&pet.id),
            pet_id: pet.id.clone(),
            task_type_id: config.weight_task_type_id.clone(),
            date: self.connection.clock().now(),
            value: Some(pet.initial_weight),
            note: Some(config.initial_weight_note.clone()),
        })
    }
}

impl PetStorage for PetRepository {
    fn store_pet(&self, pet: &Pet) -> Result<()> {
        pet.validate()?;

        let mut data = self.connection.write()?;
        if data.pets.iter().any(|p| p.id == pet.id) {
            bail!("Pet with id {} already exists", pet.id);
        }

        let weight_task_id = &self.connection.config().weight_task_type_id;
        let has_weight_task = data.task_types.iter().any(|t| &t.id == weight_task_id);

        data.pets.push(pet.clone());
        if let Some(record) = self.initial_weight_record(pet, has_weight_task) {
            debug!("Logging initial weight {} for pet {}", pet.initial_weight, pet.id);
            data.records.push(record);
        }

        info!("Stored pet {} ({})", pet.name, pet.id);
        Ok(())
    }

    fn get_pet(&self, pet_id: &str) -> Result<Option<Pet>> {
        let data = self.connection.read()?;
        Ok(data.pets.iter().find(|p| p.id == pet_id).cloned())
    }

    fn list_pets(&self) -> Result<Vec<Pet>> {
        Ok(self.connection.read()?.pets.clone())
    }

    fn update_pet(&self, pet: &Pet) -> Result<()> {
        pet.validate()?;

        let mut data = self.connection.write()?;
        match data.pets.iter_mut().find(|p| p.id == pet.id) {
            Some(existing) => {
                *existing = pet.clone();
                info!("Updated pet {}", pet.id);
                Ok(())
            }
            None => bail!("Pet {} not found", pet.id),
        }
    }

    fn delete_pet(&self, pet_id: &str) -> Result<bool> {
        let mut data = self.connection.write()?;
        let before = data.pets.len();
        data.pets.retain(|p| p.id != pet_id);
        if data.pets.len() == before {
            return Ok(false);
        }

        let records_before = data.records.len();
        data.records.retain(|r| r.pet_id != pet_id);
        info!(
            "Deleted pet {} and {} of its records",
            pet_id,
            records_before - data.records.len()
        );
        Ok(true)
    }
}
